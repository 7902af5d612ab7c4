//! Coin registry and fee configuration tests.

mod helpers;

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::Executor;

use bts::coin_registry::derive_coin_id;
use bts::msg::{
    CalculateFeeResponse, CoinIdResponse, CoinNamesResponse, CoinResponse, ConfigResponse,
    ExecuteMsg, FeeConfigResponse, InstantiateMsg, QueryMsg,
};
use bts::state::ZERO_COIN_ID;
use helpers::{
    contract_bts, instantiate_mock_bmc, local_address, setup, setup_with_wrapped, MockBmcQueryMsg,
    SentMessage, Suite,
    ADDRESS_PREFIX, FEE_NUMERATOR, FIXED_FEE, LOCAL_ACCOUNT, NATIVE_COIN, NATIVE_DENOM, NETWORK,
    WRAPPED_COIN,
};

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_instantiate_registers_native_coin() {
    let suite = setup();

    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.bmc, suite.bmc);
    assert_eq!(config.network, NETWORK);
    assert_eq!(config.native_denom, NATIVE_DENOM);
    assert_eq!(config.native_coin_name, NATIVE_COIN);
    assert_eq!(config.address_prefix, ADDRESS_PREFIX);

    let res: CoinNamesResponse = suite.query(&QueryMsg::CoinNames {});
    assert_eq!(res.names, vec![NATIVE_COIN.to_string()]);

    let res: CoinResponse = suite.query(&QueryMsg::Coin {
        name: NATIVE_COIN.to_string(),
    });
    let coin = res.coin.unwrap();
    assert!(coin.is_native);
    assert_eq!(coin.id, derive_coin_id(NATIVE_COIN));
}

#[test]
fn test_instantiate_rejects_bad_address_prefix() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let bmc = suite.bmc.clone();
    let code_id = suite.app.store_code(contract_bts());

    for prefix in ["", "Para"] {
        let res = suite.app.instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                native_coin_name: NATIVE_COIN.to_string(),
                native_decimals: 18,
                native_denom: NATIVE_DENOM.to_string(),
                network: NETWORK.to_string(),
                address_prefix: prefix.to_string(),
                bmc: bmc.to_string(),
                fee_numerator: FEE_NUMERATOR,
                fixed_fee: Uint128::from(FIXED_FEE),
            },
            &[],
            "bts",
            None,
        );
        assert!(
            res.unwrap_err()
                .root_cause()
                .to_string()
                .contains("Invalid setting"),
            "prefix {:?} accepted",
            prefix
        );
    }
}

#[test]
fn test_register_coin() {
    let suite = setup_with_wrapped();

    let res: CoinNamesResponse = suite.query(&QueryMsg::CoinNames {});
    assert_eq!(
        res.names,
        vec![NATIVE_COIN.to_string(), WRAPPED_COIN.to_string()]
    );

    let res: CoinIdResponse = suite.query(&QueryMsg::CoinId {
        name: WRAPPED_COIN.to_string(),
    });
    assert_eq!(res.id, derive_coin_id(WRAPPED_COIN));

    let res: CoinResponse = suite.query(&QueryMsg::Coin {
        name: WRAPPED_COIN.to_string(),
    });
    assert!(!res.coin.unwrap().is_native);
}

#[test]
fn test_register_duplicate_fails() {
    let mut suite = setup_with_wrapped();

    let res = suite.register(WRAPPED_COIN);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Coin already exists: ICON"));

    // native name is taken too
    let res = suite.register(NATIVE_COIN);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Coin already exists: PARA"));
}

#[test]
fn test_register_unauthorized() {
    let mut suite = setup();
    let user = suite.user.clone();

    let res = suite.execute(
        &user,
        &ExecuteMsg::Register {
            name: WRAPPED_COIN.to_string(),
            symbol: WRAPPED_COIN.to_string(),
            decimals: 18,
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    let res: CoinNamesResponse = suite.query(&QueryMsg::CoinNames {});
    assert_eq!(res.names.len(), 1);
}

#[test]
fn test_unknown_coin_queries() {
    let suite = setup();

    let res: CoinIdResponse = suite.query(&QueryMsg::CoinId {
        name: "NOPE".to_string(),
    });
    assert_eq!(res.id, ZERO_COIN_ID);

    let res: CoinResponse = suite.query(&QueryMsg::Coin {
        name: "NOPE".to_string(),
    });
    assert!(res.coin.is_none());
}

// ============================================================================
// Fees
// ============================================================================

#[test]
fn test_initial_fee_config() {
    let suite = setup();

    let res: FeeConfigResponse = suite.query(&QueryMsg::FeeConfig {});
    assert_eq!(res.fee_numerator, FEE_NUMERATOR);
    assert_eq!(res.fee_denominator, 10_000);
    assert_eq!(res.fixed_fee, Uint128::from(FIXED_FEE));

    // 500_000 + 10_000_000 * 10 / 10_000
    let res: CalculateFeeResponse = suite.query(&QueryMsg::CalculateFee {
        amount: Uint128::from(10_000_000u128),
    });
    assert_eq!(res.fee, Uint128::from(510_000u128));
}

#[test]
fn test_set_fee_ratio() {
    let mut suite = setup();
    let owner = suite.owner.clone();

    suite
        .execute(&owner, &ExecuteMsg::SetFeeRatio { fee_numerator: 100 })
        .unwrap();

    let res: CalculateFeeResponse = suite.query(&QueryMsg::CalculateFee {
        amount: Uint128::from(1_000_000u128),
    });
    assert_eq!(res.fee, Uint128::from(510_000u128));

    // numerator may equal the denominator
    suite
        .execute(
            &owner,
            &ExecuteMsg::SetFeeRatio {
                fee_numerator: 10_000,
            },
        )
        .unwrap();
}

#[test]
fn test_set_fee_ratio_above_denominator_fails() {
    let mut suite = setup();
    let owner = suite.owner.clone();

    let res = suite.execute(
        &owner,
        &ExecuteMsg::SetFeeRatio {
            fee_numerator: 10_001,
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid setting"));

    let res: FeeConfigResponse = suite.query(&QueryMsg::FeeConfig {});
    assert_eq!(res.fee_numerator, FEE_NUMERATOR);
}

#[test]
fn test_set_fixed_fee() {
    let mut suite = setup();
    let owner = suite.owner.clone();

    let res = suite.execute(
        &owner,
        &ExecuteMsg::SetFixedFee {
            fixed_fee: Uint128::zero(),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("fixed fee must be greater than zero"));

    suite
        .execute(
            &owner,
            &ExecuteMsg::SetFixedFee {
                fixed_fee: Uint128::from(1_000u128),
            },
        )
        .unwrap();

    let res: FeeConfigResponse = suite.query(&QueryMsg::FeeConfig {});
    assert_eq!(res.fixed_fee, Uint128::from(1_000u128));
}

#[test]
fn test_fee_settings_unauthorized() {
    let mut suite = setup();
    let user = suite.user.clone();

    let res = suite.execute(&user, &ExecuteMsg::SetFeeRatio { fee_numerator: 1 });
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    let res = suite.execute(
        &user,
        &ExecuteMsg::SetFixedFee {
            fixed_fee: Uint128::from(1u128),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));
}

// ============================================================================
// BMC
// ============================================================================

fn set_bmc(
    suite: &mut Suite,
    sender: &Addr,
    bmc: &Addr,
) -> anyhow::Result<cw_multi_test::AppResponse> {
    suite.execute(
        sender,
        &ExecuteMsg::SetBmc {
            bmc: bmc.to_string(),
        },
    )
}

#[test]
fn test_set_bmc() {
    let mut suite = setup_with_wrapped();
    let owner = suite.owner.clone();
    let old_bmc = suite.bmc.clone();
    let new_bmc = instantiate_mock_bmc(&mut suite.app, &owner);

    set_bmc(&mut suite, &owner, &new_bmc).unwrap();

    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.bmc, new_bmc);

    // the previous BMC lost the transport role
    let res = suite.credit_inbound(1, LOCAL_ACCOUNT, WRAPPED_COIN, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    // the new one delivers, and replies are relayed through it
    suite.bmc = new_bmc;
    suite
        .credit_inbound(1, LOCAL_ACCOUNT, WRAPPED_COIN, 10)
        .unwrap();
    assert_eq!(
        suite.balance(local_address().as_str(), WRAPPED_COIN).usable,
        Uint128::from(10u128)
    );
    assert_eq!(suite.sent().len(), 1);
    let old_sent: Vec<SentMessage> = suite
        .app
        .wrap()
        .query_wasm_smart(&old_bmc, &MockBmcQueryMsg::Sent {})
        .unwrap();
    assert!(old_sent.is_empty());
}

#[test]
fn test_set_bmc_unauthorized() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let user = suite.user.clone();
    let new_bmc = instantiate_mock_bmc(&mut suite.app, &owner);

    let res = set_bmc(&mut suite, &user, &new_bmc);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.bmc, suite.bmc);
}

#[test]
fn test_set_bmc_by_removed_owner() {
    let mut suite = setup();
    let owner_a = suite.owner.clone();
    let owner_b = Addr::unchecked("owner_b");
    let new_bmc = instantiate_mock_bmc(&mut suite.app, &owner_a);

    suite
        .execute(
            &owner_a,
            &ExecuteMsg::AddOwner {
                owner: owner_b.to_string(),
            },
        )
        .unwrap();
    suite
        .execute(
            &owner_b,
            &ExecuteMsg::RemoveOwner {
                owner: owner_a.to_string(),
            },
        )
        .unwrap();

    let res = set_bmc(&mut suite, &owner_a, &new_bmc);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    // the remaining owner still can
    set_bmc(&mut suite, &owner_b, &new_bmc).unwrap();
    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.bmc, new_bmc);
}
