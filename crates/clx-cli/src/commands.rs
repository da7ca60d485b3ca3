use std::path::Path;

use clx_core::models::entity::{ComponentField, EntityType, UwaComponents};
use clx_core::models::scorecard::{Pillar, PillarScores};
use eyre::WrapErr;
use serde::Serialize;

use crate::cli::{Command, ConfigCommand, RiskCommand, ScorecardArgs, UwaCommand};
use crate::config::{self, ClxConfig};

/// What a command prints, and whether the process should exit successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub success: bool,
}

impl Output {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    fn json<T: Serialize>(value: &T) -> eyre::Result<Self> {
        Ok(Self::ok(serde_json::to_string_pretty(value)?))
    }
}

pub fn run(command: Command, config: &ClxConfig, config_path: &Path) -> eyre::Result<Output> {
    match command {
        Command::Uwa(cmd) => run_uwa(cmd),
        Command::Risk(cmd) => run_risk(cmd),
        Command::Scorecard(args) => run_scorecard(&args, &config.pillar_fallbacks),
        Command::Config(cmd) => run_config(cmd, config, config_path),
    }
}

fn split_assignment(raw: &str) -> eyre::Result<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| eyre::eyre!("expected KEY=VALUE, got '{raw}'"))
}

pub fn parse_components(assignments: &[String]) -> eyre::Result<UwaComponents> {
    let mut components = UwaComponents::default();
    for raw in assignments {
        let (key, value) = split_assignment(raw)?;
        let field: ComponentField = key.parse()?;
        components.set(field, value);
    }
    Ok(components)
}

fn run_uwa(cmd: UwaCommand) -> eyre::Result<Output> {
    match cmd {
        UwaCommand::Generate {
            entity_type,
            components,
            plain,
        } => {
            let entity_type: EntityType = entity_type.parse()?;
            let components = parse_components(&components)?;
            let record = clx_uwa::generate_record(entity_type, components)
                .wrap_err("could not generate UWA")?;
            if plain {
                Ok(Output::ok(record.uwa))
            } else {
                Output::json(&record)
            }
        }
        UwaCommand::Validate { candidate } => {
            if clx_uwa::validate_uwa(&candidate) {
                Ok(Output::ok(format!("{candidate}: valid")))
            } else {
                Ok(Output {
                    text: format!("{candidate}: invalid"),
                    success: false,
                })
            }
        }
    }
}

fn run_risk(cmd: RiskCommand) -> eyre::Result<Output> {
    match cmd {
        RiskCommand::Score {
            device_type,
            device_count,
            strict,
            plain,
            risk_ids,
        } => {
            if strict {
                clx_rasbita::calculate_device_risk_score_strict(
                    &risk_ids,
                    &device_type,
                    device_count,
                )?;
            }
            let assessment = clx_rasbita::assess(&risk_ids, &device_type, device_count);
            if plain {
                Ok(Output::ok(format!(
                    "{} {}",
                    assessment.score, assessment.level
                )))
            } else {
                Output::json(&assessment)
            }
        }
        RiskCommand::Factors => Output::json(&clx_rasbita::all_risk_factors()),
    }
}

/// Explicit scores from `args`, with `fallbacks` for every pillar not given.
pub fn resolve_pillar_scores(
    args: &ScorecardArgs,
    fallbacks: &PillarScores,
) -> eyre::Result<PillarScores> {
    let mut scores = *fallbacks;
    let mut given = Vec::new();
    for raw in &args.scores {
        let (key, value) = split_assignment(raw)?;
        let pillar: Pillar = key.parse()?;
        let score: f64 = value
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid score for {pillar}: '{value}'"))?;
        scores.set(pillar, score);
        given.push(pillar);
    }

    for pillar in Pillar::ALL.into_iter().filter(|p| !given.contains(p)) {
        tracing::info!(
            pillar = pillar.as_str(),
            fallback = fallbacks.get(pillar),
            "pillar not scored, using fallback"
        );
    }
    Ok(scores)
}

fn run_scorecard(args: &ScorecardArgs, fallbacks: &PillarScores) -> eyre::Result<Output> {
    let scores = resolve_pillar_scores(args, fallbacks)?;
    Output::json(&clx_scorecard::breakdown(&scores))
}

fn run_config(cmd: ConfigCommand, config: &ClxConfig, path: &Path) -> eyre::Result<Output> {
    match cmd {
        ConfigCommand::Show => Output::json(config),
        ConfigCommand::Init => {
            config::save_config(path, config)?;
            Ok(Output::ok(format!("wrote {}", path.display())))
        }
    }
}
