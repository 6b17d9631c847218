//! Walk through register, login, refresh and logout against PostgreSQL
//!
//! Requires `DATABASE_URL`, `JWT_ACCESS_SECRET` and `JWT_REFRESH_SECRET`
//! (a `.env` file works too).
//!
//! Run with: cargo run -p courier_infra --example auth_flow_demo

use std::time::Duration;

use anyhow::Context;
use uuid::Uuid;

use courier_core::{DomainError, LoginInput, RegisterInput, RequestContext};
use courier_infra::AuthStack;
use courier_shared::{init_tracing, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let stack = AuthStack::build(&config)
        .await
        .context("failed to build auth stack")?;
    let service = stack.service();
    let ctx = RequestContext::with_timeout(Duration::from_secs(5));

    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("demo_{}", &suffix[..8]);
    let email = format!("{}@example.com", username);

    println!("\n=== Register ===");
    let registered = service
        .register(&ctx, RegisterInput::new(&username, &email, "demo-password"))
        .await?;
    println!("account: {} ({})", registered.account.username, registered.account.id);

    println!("\n=== Duplicate register ===");
    match service
        .register(&ctx, RegisterInput::new(&username, &email, "demo-password"))
        .await
    {
        Err(e @ DomainError::Conflict { .. }) => println!("rejected: {} [{}]", e, e.kind().code()),
        other => println!("unexpected: {:?}", other.map(|r| r.account.id)),
    }

    println!("\n=== Login ===");
    let session = service
        .login(&ctx, LoginInput::new(&email, "demo-password"))
        .await?;
    let claims = service.authenticate(&session.tokens.access_token)?;
    println!("access token for {} expires at {:?}", claims.username, claims.expires_at());

    println!("\n=== Wrong password ===");
    if let Err(e) = service.login(&ctx, LoginInput::new(&email, "nope-nope")).await {
        println!("rejected: {} [{}]", e, e.kind().code());
    }

    println!("\n=== Refresh ===");
    let refreshed = service
        .refresh_token(&ctx, &session.tokens.refresh_token)
        .await?;
    println!(
        "new access token issued, refresh token unchanged: {}",
        refreshed.refresh_token == session.tokens.refresh_token
    );

    println!("\n=== Logout ===");
    service.logout(&ctx, &session.tokens.refresh_token).await?;
    match service
        .refresh_token(&ctx, &session.tokens.refresh_token)
        .await
    {
        Err(e) => println!("refresh after logout rejected: {}", e),
        Ok(_) => println!("refresh after logout unexpectedly succeeded"),
    }

    let purged = stack.sessions().purge_expired().await?;
    println!("\npurged {} expired sessions", purged);
    println!("{}", stack.pool().get_statistics());

    stack.shutdown().await;
    Ok(())
}
