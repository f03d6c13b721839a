use cosmwasm_std::{ensure, to_binary, Addr, Empty, Env, MessageInfo, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_utils::may_pay;
use sg_std::SubMsg;
use sha2::{Digest, Sha256};

use crate::contract::TOKEN_TRANSFER_REPLY_ID;
use crate::error::ContractError;
use crate::state::Config;

/// Payment mode resolved once at the entry point, then dispatched per variant.
pub enum Payment {
    Native(Uint128),
    Token(Uint128),
}

pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    ensure!(sender == &config.owner, ContractError::Unauthorized {});
    Ok(())
}

/// Recomputes the committed root from the sender address and a sorted-pairs
/// sha256 proof. Truncated, garbled or stale-root proofs are all rejected the
/// same way as a wallet that was never on the list.
pub fn verify_proof(sender: &str, proof: &[String], root: &str) -> Result<(), ContractError> {
    let mut hash: [u8; 32] = Sha256::digest(sender.as_bytes()).into();

    for node in proof.iter() {
        let sibling: [u8; 32] = hex::decode(node)?
            .try_into()
            .map_err(|_| ContractError::InvalidProof {})?;

        let mut pair = [0u8; 64];
        if hash <= sibling {
            pair[..32].copy_from_slice(&hash);
            pair[32..].copy_from_slice(&sibling);
        } else {
            pair[..32].copy_from_slice(&sibling);
            pair[32..].copy_from_slice(&hash);
        }
        hash = Sha256::digest(pair).into();
    }

    let mut root_buf = [0u8; 32];
    hex::decode_to_slice(root, &mut root_buf)?;
    ensure!(hash == root_buf, ContractError::InvalidProof {});

    Ok(())
}

pub fn validate_root(root: &str) -> Result<(), ContractError> {
    let mut root_buf = [0u8; 32];
    hex::decode_to_slice(root, &mut root_buf)?;
    Ok(())
}

/// Exact-match payment guard. Native mode requires the attached funds to equal
/// qty * price, no overpayment tolerance and no refund path; token mode
/// requires no native funds at all.
pub fn resolve_payment(
    config: &Config,
    info: &MessageInfo,
    qty: u32,
    pay_with_native: bool,
) -> Result<Payment, ContractError> {
    if pay_with_native {
        let total = config.price.amount * Uint128::from(qty);
        let paid = may_pay(info, &config.price.denom).map_err(|_| ContractError::InvalidPayment {})?;
        ensure!(paid == total, ContractError::InvalidPayment {});
        Ok(Payment::Native(total))
    } else {
        ensure!(
            config.token_address.is_some(),
            ContractError::PaymentTokenNotSet {}
        );
        ensure!(info.funds.is_empty(), ContractError::InvalidPayment {});
        Ok(Payment::Token(config.token_price * Uint128::from(qty)))
    }
}

/// Native funds stay in the contract until the owner withdraws them. The token
/// pull-transfer runs as a submessage after our own state is committed; its
/// failure reply aborts the whole mint.
pub fn create_settlement_messages(
    config: &Config,
    env: &Env,
    sender: &Addr,
    payment: &Payment,
) -> Result<Vec<SubMsg>, ContractError> {
    match payment {
        Payment::Native(_) => Ok(vec![]),
        Payment::Token(total) => {
            let token_address = config
                .token_address
                .as_ref()
                .ok_or(ContractError::PaymentTokenNotSet {})?;
            let transfer_msg = WasmMsg::Execute {
                contract_addr: token_address.to_string(),
                msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: *total,
                })?,
                funds: vec![],
            };
            Ok(vec![SubMsg::reply_on_error(
                transfer_msg,
                TOKEN_TRANSFER_REPLY_ID,
            )])
        }
    }
}

/// One mint message per sequential token id, delegated to the sg721 collection.
pub fn create_mint_messages(
    config: &Config,
    nft_address: &Addr,
    recipient: &Addr,
    start_id: u32,
    qty: u32,
) -> Result<Vec<WasmMsg>, ContractError> {
    (start_id..start_id + qty)
        .map(|token_id| {
            let mint_msg = sg721::ExecuteMsg::<Option<Empty>, Empty>::Mint(cw721_base::MintMsg {
                token_id: token_id.to_string(),
                owner: recipient.to_string(),
                token_uri: Some(format!(
                    "{}{}{}",
                    config.base_uri, token_id, config.base_extension
                )),
                extension: None,
            });
            Ok(WasmMsg::Execute {
                contract_addr: nft_address.to_string(),
                msg: to_binary(&mint_msg)?,
                funds: vec![],
            })
        })
        .collect()
}
