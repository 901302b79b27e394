use hub_core::enums::EntityKind;
use hub_core::machine::decide_named;
use hub_core::responses::DecisionResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `workhub check`. Needs no database.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&decide(args)?, flags.format)
}

fn decide(args: &CheckArgs) -> anyhow::Result<DecisionResponse> {
    let kind = parse_enum::<EntityKind>(&args.kind, "kind")?;
    let decision = decide_named(kind, &args.from, &args.to)?;
    Ok(DecisionResponse {
        kind,
        from: args.from.clone(),
        to: args.to.clone(),
        allowed: decision.is_allowed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: &str, from: &str, to: &str) -> CheckArgs {
        CheckArgs {
            kind: kind.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    #[test]
    fn reports_allowed_and_rejected() {
        assert!(decide(&args("offer", "draft", "published")).unwrap().allowed);
        assert!(!decide(&args("contract", "generated", "completed")).unwrap().allowed);
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = decide(&args("leave", "pending", "maybe")).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(decide(&args("invoice", "draft", "sent")).is_err());
    }
}
