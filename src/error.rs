use cosmwasm_std::StdError;
use hex::FromHexError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Hex(#[from] FromHexError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("SaleNotActive")]
    SaleNotActive {},

    #[error("ZeroQuantity")]
    ZeroQuantity {},

    #[error("ExceedsPerTxLimit")]
    ExceedsPerTxLimit {},

    #[error("InvalidPayment")]
    InvalidPayment {},

    #[error("WalletQuotaExceeded")]
    WalletQuotaExceeded {},

    #[error("SupplyExceeded")]
    SupplyExceeded {},

    #[error("InvalidProof")]
    InvalidProof {},

    #[error("PaymentTransferFailed")]
    PaymentTransferFailed {},

    #[error("PaymentTokenNotSet")]
    PaymentTokenNotSet {},

    #[error("SupplyIncreaseNotAllowed")]
    SupplyIncreaseNotAllowed {},

    #[error("AirdropReserveExceeded")]
    AirdropReserveExceeded {},

    #[error("InvalidSupply")]
    InvalidSupply {},

    #[error("NothingToWithdraw")]
    NothingToWithdraw {},

    #[error("UnknownReplyId")]
    UnknownReplyId {},

    #[error("InstantiateContractError")]
    InstantiateContractError {},
}
