//! In-memory wallet and connection doubles for the launch flow tests.

use crate::error::{LaunchpadError, WalletError};
use crate::keypair::Keypair;
use crate::pubkey::Pubkey;
use crate::wallet::{LedgerConnection, WalletAdapter};
use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;
use std::cell::{Cell, RefCell};

pub(crate) struct MockWallet {
    keypair: Option<Keypair>,
    /// Transactions the wallet signed and broadcast, in order
    pub sent: RefCell<Vec<Transaction>>,
    /// Transactions the wallet signed without broadcasting
    pub signed: RefCell<Vec<Transaction>>,
    attempts: Cell<usize>,
    fail_on_send: Option<usize>,
    reject_signing: bool,
}

impl MockWallet {
    pub fn connected() -> Self {
        MockWallet {
            keypair: Some(Keypair::new()),
            sent: RefCell::new(Vec::new()),
            signed: RefCell::new(Vec::new()),
            attempts: Cell::new(0),
            fail_on_send: None,
            reject_signing: false,
        }
    }

    pub fn disconnected() -> Self {
        MockWallet {
            keypair: None,
            ..MockWallet::connected()
        }
    }

    /// Reject the `attempt`-th call to `send_transaction` (0-based).
    pub fn failing_on_send(attempt: usize) -> Self {
        MockWallet {
            fail_on_send: Some(attempt),
            ..MockWallet::connected()
        }
    }

    pub fn rejecting_signatures() -> Self {
        MockWallet {
            reject_signing: true,
            ..MockWallet::connected()
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair
            .as_ref()
            .map(|k| k.pubkey())
            .expect("mock wallet is disconnected")
    }

    fn sign(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        let keypair = self.keypair.as_ref().ok_or(WalletError::NotConnected)?;
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[keypair], blockhash)
            .map_err(|e| WalletError::Other(e.to_string()))
    }
}

#[async_trait(?Send)]
impl WalletAdapter for MockWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|k| k.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Signature, WalletError> {
        let attempt = self.attempts.get();
        self.attempts.set(attempt + 1);
        if self.fail_on_send == Some(attempt) {
            return Err(WalletError::Rejected("User rejected the request.".to_string()));
        }

        self.sign(&mut transaction)?;
        if !transaction.is_signed() {
            return Err(WalletError::Other("Missing signature".to_string()));
        }
        let signature = transaction.signatures[0];
        self.sent.borrow_mut().push(transaction);
        Ok(signature)
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, WalletError> {
        if self.reject_signing {
            return Err(WalletError::Rejected("User rejected the request.".to_string()));
        }
        self.sign(&mut transaction)?;
        self.signed.borrow_mut().push(transaction.clone());
        Ok(transaction)
    }
}

#[derive(Default)]
pub(crate) struct MockConnection {
    pub rent_requests: RefCell<Vec<usize>>,
    pub broadcast: RefCell<Vec<Transaction>>,
    blockhashes_served: Cell<u8>,
    fail_blockhash: bool,
    fail_broadcast: bool,
}

impl MockConnection {
    pub fn new() -> Self {
        MockConnection::default()
    }

    pub fn failing_blockhash() -> Self {
        MockConnection {
            fail_blockhash: true,
            ..MockConnection::default()
        }
    }

    pub fn failing_broadcast() -> Self {
        MockConnection {
            fail_broadcast: true,
            ..MockConnection::default()
        }
    }

    /// Same formula the runtime uses at the default rent rate.
    pub fn rent_for(data_len: usize) -> u64 {
        (128 + data_len as u64) * 6960
    }
}

#[async_trait(?Send)]
impl LedgerConnection for MockConnection {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, LaunchpadError> {
        self.rent_requests.borrow_mut().push(data_len);
        Ok(MockConnection::rent_for(data_len))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, LaunchpadError> {
        if self.fail_blockhash {
            return Err(LaunchpadError::Connection(
                "failed to get recent blockhash: fetch failed".to_string(),
            ));
        }
        let served = self.blockhashes_served.get().wrapping_add(1);
        self.blockhashes_served.set(served);
        Ok(Hash::new_from_array([served; 32]))
    }

    async fn send_raw_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, LaunchpadError> {
        if self.fail_broadcast {
            return Err(LaunchpadError::Connection(
                "Transaction simulation failed: owner does not match".to_string(),
            ));
        }
        self.broadcast.borrow_mut().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
