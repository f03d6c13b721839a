use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
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
}

pub const CONFIG: Item<Config> = Item::new("config");

// Hex encoded sha256 merkle root; replacing it invalidates all prior proofs
pub const WHITELIST_ROOT: Item<Option<String>> = Item::new("whitelist_root");

// Child sg721 collection, written once by the instantiate reply
pub const NFT_ADDRESS: Item<Addr> = Item::new("nft_address");

pub const TOTAL_MINTED: Item<u32> = Item::new("total_minted");

pub const DEV_MINTED: Item<u32> = Item::new("dev_minted");

pub const MINTED_PER_WALLET: Map<&Addr, u32> = Map::new("minted_per_wallet");

pub const WHITELIST_MINTED_PER_WALLET: Map<&Addr, u32> = Map::new("wl_minted_per_wallet");
