//! Default commit policy.
//!
//! This binary does not use `mod common` and never sets a policy, so it sees
//! the process default of `CommitOnOk`.

#[ctor::ctor]
fn init_logging() {
    table_test_support::logging::init();
}

use table_core::config::db::DbProfile;
use table_core::config::turns::TurnSettings;
use table_core::db::txn::{txn_policy, TxnPolicy};
use table_core::infra::state::build_state;
use table_core::repos::players;
use table_core::services::players::PlayerService;
use table_test_support::unique_helpers::{unique_room, unique_str};

#[test]
fn test_policy_is_commit_on_ok() {
    assert_eq!(txn_policy(), TxnPolicy::CommitOnOk);
}

#[tokio::test]
async fn test_default_policy_persists_writes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_db(DbProfile::InMemory)
        .with_turn_settings(TurnSettings::default())
        .build()
        .await?;
    let room = unique_room();
    let name = unique_str("alice");

    PlayerService::new(state.clone())
        .seat_player(&name, 1, 100, &room)
        .await?;

    let seated = players::find_by_room(state.db(), &room).await?;
    assert_eq!(seated.len(), 1);
    assert_eq!(seated[0].name, name);
    Ok(())
}
