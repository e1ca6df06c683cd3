extern crate std;

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

use crate::{ContractError, StakingPool, StakingPoolClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingPoolClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingPool, ());
    let client = StakingPoolClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &0, &86_400, &reward_token);

    (env, client, admin, token)
}

fn admin_role(env: &Env) -> BytesN<32> {
    common::default_admin_role(env)
}

// ── Bootstrap ────────────────────────────────────────────────────────────────

#[test]
fn test_initializer_holds_default_admin_role() {
    let (env, client, admin, _) = setup();

    assert!(client.has_role(&admin_role(&env), &admin));
    assert_eq!(client.get_role_admin(&admin_role(&env)), admin_role(&env));
    assert_eq!(client.get_role_members(&admin_role(&env)).len(), 1);
}

// ── Grant / revoke ───────────────────────────────────────────────────────────

#[test]
fn test_granted_admin_can_manage_whitelist() {
    let (env, client, admin, token) = setup();
    let second = Address::generate(&env);

    client.grant_role(&admin, &admin_role(&env), &second);
    assert!(client.has_role(&admin_role(&env), &second));

    client.add_whitelist_token(&second, &token);
    assert!(client.is_whitelisted_token(&token));
}

#[test]
fn test_revoked_admin_loses_whitelist_access() {
    let (env, client, admin, token) = setup();
    let second = Address::generate(&env);

    client.grant_role(&admin, &admin_role(&env), &second);
    client.revoke_role(&admin, &admin_role(&env), &second);
    assert!(!client.has_role(&admin_role(&env), &second));

    let result = client.try_add_whitelist_token(&second, &token);
    assert_eq!(result, Err(Ok(ContractError::AccessDenied)));
}

#[test]
fn test_non_admin_cannot_grant_role() {
    let (env, client, _admin, _) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_grant_role(&intruder, &admin_role(&env), &intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccessDenied),
        _ => unreachable!("Expected AccessDenied error"),
    }
    assert!(!client.has_role(&admin_role(&env), &intruder));
}

#[test]
fn test_non_admin_cannot_revoke_role() {
    let (env, client, admin, _) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_revoke_role(&intruder, &admin_role(&env), &admin);
    assert_eq!(result, Err(Ok(ContractError::AccessDenied)));
    assert!(client.has_role(&admin_role(&env), &admin));
}

#[test]
fn test_custom_roles_do_not_confer_admin() {
    let (env, client, admin, token) = setup();
    let operator_role = BytesN::from_array(&env, &[1u8; 32]);
    let operator = Address::generate(&env);

    client.grant_role(&admin, &operator_role, &operator);
    assert!(client.has_role(&operator_role, &operator));

    let result = client.try_add_whitelist_token(&operator, &token);
    assert_eq!(result, Err(Ok(ContractError::AccessDenied)));
}

// ── Renounce ─────────────────────────────────────────────────────────────────

#[test]
fn test_renounce_role() {
    let (env, client, admin, token) = setup();

    client.renounce_role(&admin, &admin_role(&env));
    assert!(!client.has_role(&admin_role(&env), &admin));
    assert_eq!(client.get_role_members(&admin_role(&env)).len(), 0);

    let result = client.try_add_whitelist_token(&admin, &token);
    assert_eq!(result, Err(Ok(ContractError::AccessDenied)));
}
