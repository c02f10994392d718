//! Audit orchestration.
//!
//! [`audit_skill`] runs the full per-skill pipeline — manifest parsing,
//! content scanning, capability inference, scoring — and [`audit_all`]
//! fans it out across skills with [rayon]. Skill audits share no mutable
//! state, and `par_iter().map().collect()` preserves the scanner's
//! enumeration order, so output ordering is identical to a sequential run.

use crate::finding::{Capability, SkillAuditResult};
use crate::manifest::{self, ManifestInfo};
use crate::scanner::SkillInfo;
use crate::{engine, scoring};
use rayon::prelude::*;

/// Audits every skill, in parallel, preserving input order.
pub fn audit_all(skills: &[SkillInfo]) -> Vec<SkillAuditResult> {
    skills.par_iter().map(audit_skill).collect()
}

/// Runs the audit pipeline for one skill.
///
/// File contents are read once each; a file that fails to read mid-scan is
/// skipped without aborting the skill. Invalid UTF-8 is decoded lossily so
/// adversarial encodings degrade to fewer matches, never to an error.
pub fn audit_skill(skill: &SkillInfo) -> SkillAuditResult {
    let manifest = match &skill.manifest_path {
        Some(path) => manifest::parse_manifest(path),
        None => ManifestInfo::default(),
    };

    let mut findings = Vec::new();
    let (mut network, mut shell, mut fs_write) = (false, false, false);

    for file in &skill.files {
        let Ok(bytes) = std::fs::read(&file.path) else {
            continue;
        };
        let content = String::from_utf8_lossy(&bytes);

        findings.extend(engine::scan_content(
            &content,
            &file.relative_path,
            file.is_script,
        ));

        if file.is_script {
            for capability in manifest::infer_capabilities(&content) {
                match capability {
                    Capability::Network => network = true,
                    Capability::Shell => shell = true,
                    Capability::FilesystemWrite => fs_write = true,
                }
            }
        }
    }

    let mut inferred_capabilities = Vec::new();
    if network {
        inferred_capabilities.push(Capability::Network);
    }
    if shell {
        inferred_capabilities.push(Capability::Shell);
    }
    if fs_write {
        inferred_capabilities.push(Capability::FilesystemWrite);
    }

    let (total_score, risk_level, has_hard_trigger) = scoring::calculate_score(&findings);

    SkillAuditResult {
        name: skill.name.clone(),
        path: skill.path.display().to_string(),
        risk_level,
        total_score,
        has_hard_trigger,
        file_count: skill.files.len(),
        script_count: skill.files.iter().filter(|f| f.is_script).count(),
        allowed_tools: manifest.allowed_tools,
        manifest_parsed: manifest.parse_success,
        inferred_capabilities,
        findings,
    }
}
