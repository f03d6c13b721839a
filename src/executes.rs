use cosmwasm_std::{ensure, to_binary, BankMsg, DepsMut, Env, MessageInfo, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use sg_std::Response;

use crate::error::ContractError;
use crate::helpers::{
    create_mint_messages, create_settlement_messages, ensure_owner, resolve_payment,
    validate_root, verify_proof,
};
use crate::state::{
    CONFIG, DEV_MINTED, MINTED_PER_WALLET, NFT_ADDRESS, TOTAL_MINTED, WHITELIST_MINTED_PER_WALLET,
    WHITELIST_ROOT,
};

pub fn reserved_devs_mint(
    deps: DepsMut,
    info: MessageInfo,
    qty: u32,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    ensure!(qty > 0, ContractError::ZeroQuantity {});

    let dev_minted = DEV_MINTED.load(deps.storage)?;
    ensure!(
        dev_minted + qty <= config.dev_reserve,
        ContractError::AirdropReserveExceeded {}
    );

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    ensure!(
        total_minted + qty <= config.max_supply,
        ContractError::SupplyExceeded {}
    );

    let recipient = deps.api.addr_validate(&recipient)?;
    let nft_address = NFT_ADDRESS.load(deps.storage)?;

    DEV_MINTED.save(deps.storage, &(dev_minted + qty))?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + qty))?;

    let mint_msgs = create_mint_messages(&config, &nft_address, &recipient, total_minted + 1, qty)?;

    Ok(Response::new()
        .add_messages(mint_msgs)
        .add_attribute("action", "reserved_devs_mint")
        .add_attribute("recipient", recipient)
        .add_attribute("quantity", qty.to_string()))
}

pub fn whitelist_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    qty: u32,
    pay_with_native: bool,
    proof: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure!(
        config.whitelist_sale_active,
        ContractError::SaleNotActive {}
    );
    ensure!(qty > 0, ContractError::ZeroQuantity {});
    ensure!(
        qty <= config.max_per_whitelist_tx,
        ContractError::ExceedsPerTxLimit {}
    );

    let payment = resolve_payment(&config, &info, qty, pay_with_native)?;

    let wl_minted = WHITELIST_MINTED_PER_WALLET
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(0);
    ensure!(
        wl_minted + qty <= config.max_per_whitelist_wallet,
        ContractError::WalletQuotaExceeded {}
    );

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    ensure!(
        total_minted + qty <= config.max_supply,
        ContractError::SupplyExceeded {}
    );

    let root = WHITELIST_ROOT
        .load(deps.storage)?
        .ok_or(ContractError::InvalidProof {})?;
    verify_proof(info.sender.as_str(), &proof, &root)?;

    // All guards passed: commit the counters before any external message runs.
    let minted = MINTED_PER_WALLET
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(0);
    WHITELIST_MINTED_PER_WALLET.save(deps.storage, &info.sender, &(wl_minted + qty))?;
    MINTED_PER_WALLET.save(deps.storage, &info.sender, &(minted + qty))?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + qty))?;

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let settlement = create_settlement_messages(&config, &env, &info.sender, &payment)?;
    let mint_msgs =
        create_mint_messages(&config, &nft_address, &info.sender, total_minted + 1, qty)?;

    Ok(Response::new()
        .add_submessages(settlement)
        .add_messages(mint_msgs)
        .add_attribute("action", "whitelist_mint")
        .add_attribute("sender", info.sender)
        .add_attribute("quantity", qty.to_string()))
}

pub fn public_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    qty: u32,
    pay_with_native: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure!(config.public_sale_active, ContractError::SaleNotActive {});
    ensure!(qty > 0, ContractError::ZeroQuantity {});
    ensure!(
        qty <= config.max_per_public_tx,
        ContractError::ExceedsPerTxLimit {}
    );

    let payment = resolve_payment(&config, &info, qty, pay_with_native)?;

    let minted = MINTED_PER_WALLET
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(0);
    ensure!(
        minted + qty <= config.max_per_wallet,
        ContractError::WalletQuotaExceeded {}
    );

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    ensure!(
        total_minted + qty <= config.max_supply,
        ContractError::SupplyExceeded {}
    );

    MINTED_PER_WALLET.save(deps.storage, &info.sender, &(minted + qty))?;
    TOTAL_MINTED.save(deps.storage, &(total_minted + qty))?;

    let nft_address = NFT_ADDRESS.load(deps.storage)?;
    let settlement = create_settlement_messages(&config, &env, &info.sender, &payment)?;
    let mint_msgs =
        create_mint_messages(&config, &nft_address, &info.sender, total_minted + 1, qty)?;

    Ok(Response::new()
        .add_submessages(settlement)
        .add_messages(mint_msgs)
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("quantity", qty.to_string()))
}

pub fn set_root(
    deps: DepsMut,
    info: MessageInfo,
    root: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if let Some(root) = &root {
        validate_root(root)?;
    }
    WHITELIST_ROOT.save(deps.storage, &root)?;

    Ok(Response::new().add_attribute("action", "set_root"))
}

pub fn set_whitelist_sale(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.whitelist_sale_active = active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_whitelist_sale")
        .add_attribute("active", active.to_string()))
}

pub fn set_public_sale(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.public_sale_active = active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_public_sale")
        .add_attribute("active", active.to_string()))
}

pub fn set_price(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.price.amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_price")
        .add_attribute("amount", amount))
}

pub fn set_token_price(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.token_price = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_token_price")
        .add_attribute("amount", amount))
}

// Reduction only. A target below what is already minted clamps to the minted
// count so the supply invariant keeps holding.
pub fn reduce_supply(
    deps: DepsMut,
    info: MessageInfo,
    new_max: u32,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    ensure!(
        new_max <= config.max_supply,
        ContractError::SupplyIncreaseNotAllowed {}
    );

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    config.max_supply = new_max.max(total_minted);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "reduce_supply")
        .add_attribute("max_supply", config.max_supply.to_string()))
}

pub fn set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.base_uri = base_uri;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "set_base_uri"))
}

pub fn set_contract_uri(
    deps: DepsMut,
    info: MessageInfo,
    contract_uri: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.contract_uri = contract_uri;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "set_contract_uri"))
}

pub fn set_token_contract(
    deps: DepsMut,
    info: MessageInfo,
    address: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.token_address = match address {
        Some(addr) => Some(deps.api.addr_validate(&addr)?),
        None => None,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "set_token_contract"))
}

pub fn transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("owner", config.owner))
}

pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let balances = deps
        .querier
        .query_all_balances(env.contract.address.as_str())?;
    ensure!(!balances.is_empty(), ContractError::NothingToWithdraw {});

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: balances,
        })
        .add_attribute("action", "withdraw"))
}

pub fn withdraw_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let token_address = deps.api.addr_validate(&address)?;
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &token_address,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    ensure!(
        !balance.balance.is_zero(),
        ContractError::NothingToWithdraw {}
    );

    Ok(Response::new()
        .add_message(WasmMsg::Execute {
            contract_addr: token_address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: config.owner.to_string(),
                amount: balance.balance,
            })?,
            funds: vec![],
        })
        .add_attribute("action", "withdraw_token")
        .add_attribute("amount", balance.balance))
}
