use cosmwasm_std::{
    ensure, entry_point, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, ReplyOn,
    StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::parse_reply_instantiate_data;
use sg_std::Response;

use crate::error::ContractError;
use crate::executes::{
    public_mint, reduce_supply, reserved_devs_mint, set_base_uri, set_contract_uri, set_price,
    set_public_sale, set_root, set_token_contract, set_token_price, set_whitelist_sale,
    transfer_ownership, whitelist_mint, withdraw, withdraw_token,
};
use crate::helpers::validate_root;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, MintCountsResponse, QueryMsg,
    WalletCountsResponse,
};
use crate::state::{
    Config, CONFIG, DEV_MINTED, MINTED_PER_WALLET, NFT_ADDRESS, TOTAL_MINTED,
    WHITELIST_MINTED_PER_WALLET, WHITELIST_ROOT,
};

pub const CONTRACT_NAME: &str = "crates.io:cw-nft-sale-controller";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const INSTANTIATE_SG721_REPLY_ID: u64 = 1;
pub const TOKEN_TRANSFER_REPLY_ID: u64 = 2;

const DEFAULT_BASE_EXTENSION: &str = ".json";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ensure!(msg.max_supply > 0, ContractError::InvalidSupply {});
    ensure!(
        msg.dev_reserve <= msg.max_supply,
        ContractError::InvalidSupply {}
    );
    if let Some(root) = &msg.whitelist_root {
        validate_root(root)?;
    }

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender.clone(),
    };
    let token_address = match msg.token_address {
        Some(addr) => Some(deps.api.addr_validate(&addr)?),
        None => None,
    };

    let config = Config {
        owner: owner.clone(),
        public_sale_active: false,
        whitelist_sale_active: false,
        price: msg.price,
        token_price: msg.token_price,
        token_address,
        max_supply: msg.max_supply,
        dev_reserve: msg.dev_reserve,
        max_per_public_tx: msg.max_per_public_tx,
        max_per_whitelist_tx: msg.max_per_whitelist_tx,
        max_per_wallet: msg.max_per_wallet,
        max_per_whitelist_wallet: msg.max_per_whitelist_wallet,
        base_uri: msg.base_uri,
        base_extension: msg
            .base_extension
            .unwrap_or_else(|| DEFAULT_BASE_EXTENSION.to_string()),
        contract_uri: msg.contract_uri,
    };

    CONFIG.save(deps.storage, &config)?;
    WHITELIST_ROOT.save(deps.storage, &msg.whitelist_root)?;
    TOTAL_MINTED.save(deps.storage, &0)?;
    DEV_MINTED.save(deps.storage, &0)?;

    // The collection is created as a child contract with this controller as
    // its only minter; the reply stores its address.
    let collection = msg.collection_params;
    let sub_msg = SubMsg {
        msg: WasmMsg::Instantiate {
            code_id: collection.code_id,
            msg: to_binary(&sg721::InstantiateMsg {
                name: collection.name.clone(),
                symbol: collection.symbol,
                minter: env.contract.address.to_string(),
                collection_info: collection.info,
            })?,
            funds: info.funds,
            admin: Some(owner.to_string()),
            label: format!("SG721-{}", collection.name.trim()),
        }
        .into(),
        id: INSTANTIATE_SG721_REPLY_ID,
        gas_limit: None,
        reply_on: ReplyOn::Success,
    };

    Ok(Response::new()
        .add_submessage(sub_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION)
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReservedDevsMint { qty, recipient } => {
            reserved_devs_mint(deps, info, qty, recipient)
        }
        ExecuteMsg::WhitelistMint {
            qty,
            pay_with_native,
            proof,
        } => whitelist_mint(deps, env, info, qty, pay_with_native, proof),
        ExecuteMsg::Mint {
            qty,
            pay_with_native,
        } => public_mint(deps, env, info, qty, pay_with_native),
        ExecuteMsg::SetRoot { root } => set_root(deps, info, root),
        ExecuteMsg::SetWhitelistSale { active } => set_whitelist_sale(deps, info, active),
        ExecuteMsg::SetPublicSale { active } => set_public_sale(deps, info, active),
        ExecuteMsg::SetPrice { amount } => set_price(deps, info, amount),
        ExecuteMsg::SetTokenPrice { amount } => set_token_price(deps, info, amount),
        ExecuteMsg::ReduceSupply { new_max } => reduce_supply(deps, info, new_max),
        ExecuteMsg::SetBaseUri { base_uri } => set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetContractUri { contract_uri } => set_contract_uri(deps, info, contract_uri),
        ExecuteMsg::SetTokenContract { address } => set_token_contract(deps, info, address),
        ExecuteMsg::TransferOwnership { new_owner } => transfer_ownership(deps, info, new_owner),
        ExecuteMsg::Withdraw {} => withdraw(deps, env, info),
        ExecuteMsg::WithdrawToken { address } => withdraw_token(deps, env, info, address),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_SG721_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)
                .map_err(|_| ContractError::InstantiateContractError {})?;
            let nft_address = deps.api.addr_validate(&res.contract_address)?;
            NFT_ADDRESS.save(deps.storage, &nft_address)?;
            Ok(Response::new()
                .add_attribute("action", "instantiate_sg721_reply")
                .add_attribute("nft_address", nft_address))
        }
        // Only error replies are requested for the transfer; erroring here
        // reverts the mint along with it.
        TOKEN_TRANSFER_REPLY_ID => Err(ContractError::PaymentTransferFailed {}),
        _ => Err(ContractError::UnknownReplyId {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&ConfigResponse {
                owner: config.owner,
                nft_address: NFT_ADDRESS.load(deps.storage)?,
                public_sale_active: config.public_sale_active,
                whitelist_sale_active: config.whitelist_sale_active,
                price: config.price,
                token_price: config.token_price,
                token_address: config.token_address,
                max_supply: config.max_supply,
                dev_reserve: config.dev_reserve,
                max_per_public_tx: config.max_per_public_tx,
                max_per_whitelist_tx: config.max_per_whitelist_tx,
                max_per_wallet: config.max_per_wallet,
                max_per_whitelist_wallet: config.max_per_whitelist_wallet,
                base_uri: config.base_uri,
                base_extension: config.base_extension,
                contract_uri: config.contract_uri,
                whitelist_root: WHITELIST_ROOT.load(deps.storage)?,
            })
        }
        QueryMsg::GetMintCounts {} => {
            let config = CONFIG.load(deps.storage)?;
            to_binary(&MintCountsResponse {
                total_minted: TOTAL_MINTED.load(deps.storage)?,
                dev_minted: DEV_MINTED.load(deps.storage)?,
                max_supply: config.max_supply,
                dev_reserve: config.dev_reserve,
            })
        }
        QueryMsg::GetWalletCounts { wallet } => {
            let wallet = deps.api.addr_validate(&wallet)?;
            to_binary(&WalletCountsResponse {
                minted: MINTED_PER_WALLET
                    .may_load(deps.storage, &wallet)?
                    .unwrap_or(0),
                whitelist_minted: WHITELIST_MINTED_PER_WALLET
                    .may_load(deps.storage, &wallet)?
                    .unwrap_or(0),
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    Ok(Response::default())
}
