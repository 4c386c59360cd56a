//! guardian-cli — Command-line front end for the GuardianChain tier engine.
//!
//! Every subcommand maps onto one engine operation and prints its result as
//! pretty JSON on stdout. Logs go to stderr.

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use guardian_core::constants::DEFAULT_COMPOUNDING_FREQUENCY;
use guardian_core::TierCatalog;
use guardian_tiers::{get_recommended_tier, TierPolicy, UsagePattern, UsageSnapshot};
use guardian_yield::{calculate_compound_yield, TimeHorizon, YieldEngine, YieldParams};
use serde::Serialize;
use serde_json::json;

use crate::config::Config;

/// GuardianChain tier, yield and reward calculator.
#[derive(Parser)]
#[command(name = "guardian-cli")]
#[command(version, about = "Tier-based yield and reward calculations for GuardianChain.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple pro-rated staking yield.
    Yield(YieldArgs),
    /// Validate yield inputs, reporting every problem.
    ValidateYield(YieldArgs),
    /// Compound interest on a principal.
    Compound(CompoundArgs),
    /// Capsule creation reward for a stake.
    Rewards(RewardsArgs),
    /// Projected yield plus capsule rewards over a horizon.
    Project(ProjectArgs),
    /// Show one tier's configuration.
    Tier(TierArgs),
    /// Dump the active tier table.
    Tiers,
    /// Check whether a tier includes a feature (substring match).
    HasFeature(HasFeatureArgs),
    /// Check usage counters against a tier's limits.
    Usage(UsageArgs),
    /// Compare two tiers.
    UpgradeBenefits(UpgradePairArgs),
    /// Validate an upgrade against a GTT balance.
    ValidateUpgrade(ValidateUpgradeArgs),
    /// Recommend a tier for a usage pattern.
    Recommend(RecommendArgs),
}

#[derive(Args)]
struct YieldArgs {
    /// Tier name (case-insensitive).
    #[arg(short, long)]
    tier: String,

    /// Staked principal in GTT.
    #[arg(short, long, allow_hyphen_values = true)]
    amount: f64,

    /// Duration in months (may be fractional).
    #[arg(short, long, allow_hyphen_values = true)]
    duration: f64,
}

#[derive(Args)]
struct CompoundArgs {
    #[arg(short, long, allow_hyphen_values = true)]
    principal: f64,

    /// Annual rate as a fraction (0.12 = 12%).
    #[arg(short, long)]
    rate: f64,

    /// Compounding periods per year.
    #[arg(short, long, default_value_t = DEFAULT_COMPOUNDING_FREQUENCY)]
    frequency: u32,

    #[arg(short, long)]
    years: f64,
}

#[derive(Args)]
struct RewardsArgs {
    /// Staked amount in GTT.
    #[arg(short, long, allow_hyphen_values = true)]
    amount: f64,
}

#[derive(Args)]
struct ProjectArgs {
    #[arg(short, long, allow_hyphen_values = true)]
    amount: f64,

    #[arg(short, long)]
    tier: String,

    /// One of 1month, 3months, 6months, 1year.
    #[arg(short = 'p', long, default_value = "1year")]
    horizon: TimeHorizon,
}

#[derive(Args)]
struct TierArgs {
    tier: String,
}

#[derive(Args)]
struct HasFeatureArgs {
    tier: String,
    feature: String,
}

#[derive(Args)]
struct UsageArgs {
    #[arg(short, long)]
    tier: String,

    #[arg(long, default_value_t = 0)]
    capsules: u64,

    /// Storage used in GB.
    #[arg(long, default_value_t = 0.0)]
    storage: f64,

    #[arg(long, default_value_t = 0)]
    api_calls: u64,
}

#[derive(Args)]
struct UpgradePairArgs {
    current: String,
    target: String,
}

#[derive(Args)]
struct ValidateUpgradeArgs {
    current: String,
    target: String,

    /// GTT balance available for staking.
    #[arg(short, long, allow_hyphen_values = true)]
    balance: f64,
}

#[derive(Args)]
struct RecommendArgs {
    #[arg(long, default_value_t = 0)]
    capsules: u64,

    #[arg(long, default_value_t = 0.0)]
    storage: f64,

    #[arg(long, default_value_t = 0)]
    api_calls: u64,

    #[arg(long)]
    enterprise: bool,

    #[arg(long)]
    monetization: bool,

    #[arg(long)]
    custom_branding: bool,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = config.tier_table()?;
    let engine = YieldEngine::new(table.clone());
    let policy = TierPolicy::new(table.clone());

    match cli.command {
        Commands::Yield(args) => {
            print_json(&engine.calculate_yield(&args.tier, args.amount, args.duration))
        }
        Commands::ValidateYield(args) => print_json(&engine.validate_yield_params(&YieldParams {
            tier: args.tier,
            amount: args.amount,
            duration: args.duration,
        })),
        Commands::Compound(args) => {
            let balance =
                calculate_compound_yield(args.principal, args.rate, args.frequency, args.years);
            print_json(&json!({
                "principal": args.principal,
                "balance": balance,
                "interest": balance - args.principal,
            }))
        }
        Commands::Rewards(args) => print_json(&engine.calculate_capsule_rewards(args.amount)),
        Commands::Project(args) => print_json(&engine.calculate_projected_earnings(
            args.amount,
            &args.tier,
            args.horizon,
        )),
        Commands::Tier(args) => {
            let resolved = table.resolve(&args.tier);
            print_json(&json!({
                "config": resolved.config,
                "usedFallback": resolved.used_fallback,
                "level": resolved.tier().level(),
                "progress": policy.tier_progress(&args.tier),
                "nextTier": policy.next_tier(&args.tier),
                "annualSavings": policy.annual_savings(&args.tier),
            }))
        }
        Commands::Tiers => print_json(&table.tiers()),
        Commands::HasFeature(args) => print_json(&json!({
            "tier": policy.get_tier_details(&args.tier).name,
            "feature": args.feature,
            "hasAccess": policy.has_feature_access(&args.tier, &args.feature),
        })),
        Commands::Usage(args) => print_json(&policy.check_usage_limits(
            &args.tier,
            &UsageSnapshot {
                capsules_this_month: args.capsules,
                storage_used_gb: args.storage,
                api_calls_today: args.api_calls,
            },
        )),
        Commands::UpgradeBenefits(args) => {
            print_json(&policy.get_upgrade_benefits(&args.current, &args.target))
        }
        Commands::ValidateUpgrade(args) => {
            let (current, target, balance) = (&args.current, &args.target, args.balance);
            print_json(&json!({
                "validation": policy.validate_tier_upgrade(current, target, balance),
                "canUpgrade": policy.can_upgrade(current, target, balance),
                "progress": policy.upgrade_progress(current, target, balance),
                "shortfall": policy.gtt_shortfall(target, balance),
            }))
        }
        Commands::Recommend(args) => {
            let pattern = UsagePattern {
                capsules_per_month: args.capsules,
                storage_gb: args.storage,
                api_calls_per_day: args.api_calls,
                enterprise: args.enterprise,
                monetization: args.monetization,
                custom_branding: args.custom_branding,
            };
            print_json(&json!({ "recommendedTier": get_recommended_tier(&pattern) }))
        }
    }
}
