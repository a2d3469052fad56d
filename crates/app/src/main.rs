//! Flames Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use flames_app::{
    context::AppContext,
    database,
    domain::coupons::{
        data::NewCoupon,
        records::{CouponType, CouponUuid},
    },
};
use jiff::Timestamp;
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(name = "flames-app", about = "Flames CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(DatabaseArgs),

    /// Load the demo catalog into empty collections
    Seed(DatabaseArgs),

    Coupon(CouponCommand),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    Create(CreateCouponArgs),
}

#[derive(Debug, Args)]
struct CreateCouponArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Coupon code; matched case-insensitively at checkout
    #[arg(long)]
    code: String,

    /// `percent` or `flat`
    #[arg(long)]
    kind: CouponType,

    /// Percentage points (e.g. 7.5), or a whole flat amount in minor units
    #[arg(long)]
    value: Decimal,

    /// Minimum order subtotal in minor units
    #[arg(long, default_value_t = 0)]
    min_order: u64,

    /// Optional expiry timestamp (RFC 3339)
    #[arg(long)]
    expires_at: Option<Timestamp>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Migrate(args) => migrate(args).await,
        Commands::Seed(args) => seed(args).await,
        Commands::Coupon(CouponCommand {
            command: CouponSubcommand::Create(args),
        }) => create_coupon(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn seed(args: DatabaseArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url, true)
        .await
        .map_err(|error| format!("failed to initialize: {error}"))?;

    let summary = context
        .seed
        .seed()
        .await
        .map_err(|error| format!("failed to seed: {error}"))?;

    if summary.is_empty() {
        println!("store already seeded");
    } else {
        println!("categories: {}", summary.categories);
        println!("products: {}", summary.products);
        println!("banners: {}", summary.banners);
    }

    Ok(())
}

async fn create_coupon(args: CreateCouponArgs) -> Result<(), String> {
    if let Some(expires_at) = args.expires_at
        && expires_at <= Timestamp::now()
    {
        return Err("expires-at must be in the future".to_string());
    }

    let context = AppContext::from_database_url(&args.database.database_url, false)
        .await
        .map_err(|error| format!("failed to initialize: {error}"))?;

    let coupon = context
        .coupons
        .create_coupon(NewCoupon {
            uuid: CouponUuid::new(),
            code: args.code,
            kind: args.kind,
            value: args.value,
            min_order: args.min_order,
            active: true,
            expires_at: args.expires_at,
        })
        .await
        .map_err(|error| format!("failed to create coupon: {error}"))?;

    println!("coupon_uuid: {}", coupon.uuid);
    println!("code: {}", coupon.code);
    println!("kind: {}", coupon.kind);
    println!("value: {}", coupon.value);

    Ok(())
}
