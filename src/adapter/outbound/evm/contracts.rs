//! Solidity interfaces used by the adapters.

use alloy_sol_types::sol;

sol! {
    /// Outbound rate limiter of the bridge, keyed by destination endpoint id.
    #[sol(rpc)]
    contract IRateLimiter {
        function getAmountCanBeSent(uint32 dstEid) external view returns (uint256 currentAmountInFlight, uint256 amountCanBeSent);
    }
}

sol! {
    /// Withdrawal entry point of the bridge.
    #[sol(rpc)]
    contract IBridge {
        function withdraw(address recipient, uint256 amount) external;
    }
}

// ERC-20 interface (minimal for balance sweeps)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}
