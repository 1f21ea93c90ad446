//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lexdesk_core` linkage.
//! - Report whether `DATABASE_URL` resolves to a usable store location.

use lexdesk_core::DatabaseUrl;

fn main() {
    println!("lexdesk_core ping={}", lexdesk_core::ping());
    println!("lexdesk_core version={}", lexdesk_core::core_version());
    match DatabaseUrl::from_env() {
        Ok(_) => println!("database_url=ok"),
        Err(err) => println!("database_url=error detail={err}"),
    }
}
