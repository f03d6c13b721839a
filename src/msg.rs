use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};
use sg2::msg::CollectionParams;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: Option<String>,
    pub collection_params: CollectionParams,
    pub price: Coin,
    pub token_price: Uint128,
    pub token_address: Option<String>,
    pub max_supply: u32,
    pub dev_reserve: u32,
    pub max_per_public_tx: u32,
    pub max_per_whitelist_tx: u32,
    pub max_per_wallet: u32,
    pub max_per_whitelist_wallet: u32,
    pub base_uri: String,
    pub base_extension: Option<String>,
    pub contract_uri: Option<String>,
    pub whitelist_root: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    ReservedDevsMint {
        qty: u32,
        recipient: String,
    },
    WhitelistMint {
        qty: u32,
        pay_with_native: bool,
        proof: Vec<String>,
    },
    Mint {
        qty: u32,
        pay_with_native: bool,
    },
    SetRoot {
        root: Option<String>,
    },
    SetWhitelistSale {
        active: bool,
    },
    SetPublicSale {
        active: bool,
    },
    SetPrice {
        amount: Uint128,
    },
    SetTokenPrice {
        amount: Uint128,
    },
    ReduceSupply {
        new_max: u32,
    },
    SetBaseUri {
        base_uri: String,
    },
    SetContractUri {
        contract_uri: Option<String>,
    },
    SetTokenContract {
        address: Option<String>,
    },
    TransferOwnership {
        new_owner: String,
    },
    Withdraw {},
    WithdrawToken {
        address: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    GetConfig {},
    #[returns(MintCountsResponse)]
    GetMintCounts {},
    #[returns(WalletCountsResponse)]
    GetWalletCounts { wallet: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub nft_address: Addr,
    pub public_sale_active: bool,
    pub whitelist_sale_active: bool,
    pub price: Coin,
    pub token_price: Uint128,
    pub token_address: Option<Addr>,
    pub max_supply: u32,
    pub dev_reserve: u32,
    pub max_per_public_tx: u32,
    pub max_per_whitelist_tx: u32,
    pub max_per_wallet: u32,
    pub max_per_whitelist_wallet: u32,
    pub base_uri: String,
    pub base_extension: String,
    pub contract_uri: Option<String>,
    pub whitelist_root: Option<String>,
}

#[cw_serde]
pub struct MintCountsResponse {
    pub total_minted: u32,
    pub dev_minted: u32,
    pub max_supply: u32,
    pub dev_reserve: u32,
}

#[cw_serde]
pub struct WalletCountsResponse {
    pub minted: u32,
    pub whitelist_minted: u32,
}

#[cw_serde]
pub struct MigrateMsg {}
