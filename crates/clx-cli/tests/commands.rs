use std::path::Path;

use clap::Parser;
use clx_cli::cli::{Cli, ScorecardArgs};
use clx_cli::commands::{parse_components, resolve_pillar_scores, run};
use clx_cli::config::{ClxConfig, default_pillar_fallbacks};
use clx_core::models::entity::ComponentField;

fn exec(args: &[&str]) -> eyre::Result<clx_cli::commands::Output> {
    let cli = Cli::try_parse_from(std::iter::once("clx").chain(args.iter().copied()))?;
    run(cli.command, &ClxConfig::default(), Path::new("unused.json"))
}

#[test]
fn generate_plain_prints_identifier() {
    let out = exec(&[
        "uwa",
        "generate",
        "--entity",
        "vm",
        "--set",
        "instanceUuid=1c49ca47-ae be-be40-87c5-2abdf4aa0000",
        "--set",
        "environment=Production",
        "--set",
        "address=2X57+XH Cupertino",
        "--set",
        "os_name=Ubuntu22",
        "--plain",
    ])
    .unwrap();
    assert!(out.success);
    assert!(out.text.starts_with("CLX-VM2ABDF-4AA0000-PROD2X5-7XHUBUN-"), "{}", out.text);
    assert!(clx_uwa::validate_uwa(&out.text));
}

#[test]
fn generate_reports_missing_component() {
    let err = exec(&["uwa", "generate", "--entity", "account", "--set", "username=svc"])
        .unwrap_err();
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    assert!(chain.iter().any(|m| m.contains("'platform'")), "{chain:?}");
}

#[test]
fn generate_rejects_unknown_entity() {
    assert!(exec(&["uwa", "generate", "--entity", "spaceship"]).is_err());
}

#[test]
fn validate_sets_exit_status() {
    let ok = exec(&["uwa", "validate", "CLX-AAAAAAA-BBBBBBB-CCCCCCC-DDDDDDD-EEEEEEE-1234567"])
        .unwrap();
    assert!(ok.success);
    let bad = exec(&["uwa", "validate", "CLX-SHORT"]).unwrap();
    assert!(!bad.success);
}

#[test]
fn risk_score_plain() {
    let out = exec(&[
        "risk", "score", "--device", "server", "--plain", "ransomware", "phishing", "data_breach",
    ])
    .unwrap();
    assert_eq!(out.text, "48 Medium");
}

#[test]
fn risk_score_strict_rejects_unknown_ids() {
    assert!(exec(&["risk", "score", "--device", "server", "--strict", "bogus"]).is_err());
    assert!(exec(&["risk", "score", "--device", "server", "bogus"]).is_ok());
}

#[test]
fn scorecard_uses_fallbacks_for_missing_pillars() {
    let out = exec(&["scorecard", "--set", "qualitative=85", "--set", "quantitative=72"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(json["pillars"][0]["score"], 85.0);
    assert_eq!(json["pillars"][2]["score"], default_pillar_fallbacks().cost_benefit);
}

#[test]
fn resolve_rejects_bad_assignments() {
    let fallbacks = default_pillar_fallbacks();
    for bad in ["governance", "nonsense=10", "governance=high"] {
        let args = ScorecardArgs {
            scores: vec![bad.to_string()],
        };
        assert!(resolve_pillar_scores(&args, &fallbacks).is_err(), "{bad}");
    }
}

#[test]
fn components_accept_both_spellings() {
    let c = parse_components(&["os_name=Linux".to_string(), "serialNumber=SN1".to_string()])
        .unwrap();
    assert_eq!(c.get(ComponentField::OsName), Some("Linux"));
    assert_eq!(c.get(ComponentField::SerialNumber), Some("SN1"));
}
