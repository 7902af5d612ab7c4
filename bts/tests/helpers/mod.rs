#![allow(dead_code)]

pub mod mock_bmc;

pub use mock_bmc::*;

use anyhow::Result as AnyResult;
use cosmwasm_std::{coins, to_json_binary, Addr, Coin, Empty, Uint128};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

use bts::address_codec::{local_account, string_to_address};
use bts::msg::{BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, TransportMsg};
use common::{Asset, ResponseCode, ServiceMessage, SERVICE_NAME};

// ============================================================================
// Fixtures
// ============================================================================

pub const NETWORK: &str = "0x1.para";
pub const REMOTE_NETWORK: &str = "0x1.icon";
pub const NATIVE_COIN: &str = "PARA";
pub const NATIVE_DENOM: &str = "upara";
pub const WRAPPED_COIN: &str = "ICON";
pub const FEE_NUMERATOR: u64 = 10;
pub const FIXED_FEE: u128 = 500_000;
pub const ADDRESS_PREFIX: &str = "para";

/// Checksummed hex form of the inbound receiver, as remote chains address it
pub const LOCAL_ACCOUNT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
/// Account on the remote chain
pub const REMOTE_ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

pub const USER_FUNDS: u128 = 1_000_000_000;

/// The bech32 account `LOCAL_ACCOUNT` is credited to on this chain
pub fn local_address() -> Addr {
    let raw = string_to_address(LOCAL_ACCOUNT).unwrap();
    Addr::unchecked(local_account(&raw, ADDRESS_PREFIX).unwrap())
}

pub fn remote_btp_address() -> String {
    format!("btp://{}/{}", REMOTE_NETWORK, REMOTE_ACCOUNT)
}

pub fn contract_bts() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bts::contract::execute,
        bts::contract::instantiate,
        bts::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub bts: Addr,
    pub bmc: Addr,
    pub owner: Addr,
    pub user: Addr,
}

/// BTS + mock BMC with the native coin registered and `user` holding
/// `USER_FUNDS` of the native denom in the bank.
pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("owner");
    let user = Addr::unchecked("user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(USER_FUNDS, NATIVE_DENOM))
            .unwrap();
    });

    let bmc = instantiate_mock_bmc(&mut app, &owner);

    let bts_code_id = app.store_code(contract_bts());
    let bts = app
        .instantiate_contract(
            bts_code_id,
            owner.clone(),
            &InstantiateMsg {
                native_coin_name: NATIVE_COIN.to_string(),
                native_decimals: 18,
                native_denom: NATIVE_DENOM.to_string(),
                network: NETWORK.to_string(),
                address_prefix: ADDRESS_PREFIX.to_string(),
                bmc: bmc.to_string(),
                fee_numerator: FEE_NUMERATOR,
                fixed_fee: Uint128::from(FIXED_FEE),
            },
            &[],
            "bts",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        bts,
        bmc,
        owner,
        user,
    }
}

/// A fresh mock BMC contract
pub fn instantiate_mock_bmc(app: &mut App, owner: &Addr) -> Addr {
    let bmc_code_id = app.store_code(contract_mock_bmc());
    app.instantiate_contract(
        bmc_code_id,
        owner.clone(),
        &MockBmcInstantiateMsg {},
        &[],
        "bmc",
        None,
    )
    .unwrap()
}

/// `setup()` plus the wrapped coin registered
pub fn setup_with_wrapped() -> Suite {
    let mut suite = setup();
    suite.register(WRAPPED_COIN).unwrap();
    suite
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bts.clone(), msg, &[])
    }

    pub fn execute_with_funds(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bts.clone(), msg, funds)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app.wrap().query_wasm_smart(&self.bts, msg).unwrap()
    }

    pub fn register(&mut self, name: &str) -> AnyResult<AppResponse> {
        let owner = self.owner.clone();
        self.execute(
            &owner,
            &ExecuteMsg::Register {
                name: name.to_string(),
                symbol: name.to_string(),
                decimals: 18,
            },
        )
    }

    pub fn balance(&self, account: &str, coin_name: &str) -> BalanceResponse {
        self.query(&QueryMsg::Balance {
            account: account.to_string(),
            coin_name: coin_name.to_string(),
        })
    }

    /// Bank balance of the native denom
    pub fn bank_balance(&self, account: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_balance(account, NATIVE_DENOM)
            .unwrap()
            .amount
    }

    pub fn accumulated_fee(&self, coin_name: &str) -> Uint128 {
        let res: bts::msg::AccumulatedFeesResponse = self.query(&QueryMsg::AccumulatedFees {});
        res.fees
            .into_iter()
            .find(|fee| fee.coin_name == coin_name)
            .map(|fee| fee.value)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Transport side
    // ------------------------------------------------------------------------

    pub fn transport(&mut self, msg: TransportMsg) -> AnyResult<AppResponse> {
        let bmc = self.bmc.clone();
        self.execute(&bmc, &ExecuteMsg::Transport(msg))
    }

    /// Deliver a service message from `src` as the BMC would
    pub fn deliver(&mut self, src: &str, sn: u64, msg: &ServiceMessage) -> AnyResult<AppResponse> {
        self.transport(TransportMsg::HandleBtpMessage {
            src: src.to_string(),
            svc: SERVICE_NAME.to_string(),
            sn,
            msg: to_json_binary(msg).unwrap(),
        })
    }

    /// Deliver the remote chain's response to our request `sn`
    pub fn respond(&mut self, sn: u64, code: ResponseCode) -> AnyResult<AppResponse> {
        self.deliver(
            REMOTE_NETWORK,
            sn,
            &ServiceMessage::Response {
                code,
                message: String::new(),
            },
        )
    }

    /// Inbound transfer of `coin_name` to a 0x account
    pub fn credit_inbound(
        &mut self,
        sn: u64,
        to: &str,
        coin_name: &str,
        value: u128,
    ) -> AnyResult<AppResponse> {
        self.deliver(
            REMOTE_NETWORK,
            sn,
            &ServiceMessage::TransferRequest {
                from: REMOTE_ACCOUNT.to_string(),
                to: to.to_string(),
                assets: vec![Asset::new(coin_name, value)],
            },
        )
    }

    pub fn set_bmc_failing(&mut self, failing: bool) {
        let owner = self.owner.clone();
        self.app
            .execute_contract(
                owner,
                self.bmc.clone(),
                &MockBmcExecuteMsg::SetFailing { failing },
                &[],
            )
            .unwrap();
    }

    /// Messages the BMC has relayed so far, oldest first
    pub fn sent(&self) -> Vec<SentMessage> {
        self.app
            .wrap()
            .query_wasm_smart(&self.bmc, &MockBmcQueryMsg::Sent {})
            .unwrap()
    }

    pub fn last_sent(&self) -> SentMessage {
        self.sent().pop().expect("no message sent")
    }
}
