use crate::launch::{MintReport, MintStep};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Failures reported by the injected wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Wallet not connected")]
    NotConnected,
    #[error("Wallet rejected the request: {0}")]
    Rejected(String),
    #[error("Wallet error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum LaunchpadError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Instruction error: {0}")]
    Instruction(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Signing error: {0}")]
    Signing(String),
    /// A mint step failed after the mint keypair was generated.
    #[error("Mint {} aborted at {step}: {source}", .report.mint)]
    MintAborted {
        step: MintStep,
        source: Box<LaunchpadError>,
        report: Box<MintReport>,
    },
}

impl LaunchpadError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LaunchpadError::InvalidInput(message.into())
    }

    /// The step that failed, for errors raised by the mint orchestrator.
    pub fn failed_step(&self) -> Option<MintStep> {
        match self {
            LaunchpadError::MintAborted { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Partial progress recorded before a mint step failed.
    pub fn partial_report(&self) -> Option<&MintReport> {
        match self {
            LaunchpadError::MintAborted { report, .. } => Some(report),
            _ => None,
        }
    }
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions.
// A MintAborted error also carries its partial report so the page can show
// which steps landed and keep the mint secret key.
impl From<LaunchpadError> for JsValue {
    fn from(err: LaunchpadError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        if let LaunchpadError::MintAborted { step, report, .. } = &err {
            if let Ok(report) = crate::wasm::to_js_value(report.as_ref()) {
                let _ = js_sys::Reflect::set(&js_err, &"report".into(), &report);
            }
            let _ = js_sys::Reflect::set(&js_err, &"step".into(), &step.as_str().into());
        }
        js_err.into()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::keypair::{Keypair, KeypairExt};
    use crate::launch::StepRecord;
    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn aborted() -> (LaunchpadError, MintReport) {
        let mint = Keypair::new();
        let report = MintReport {
            mint: mint.address(),
            mint_keypair: mint.to_generated(),
            associated_account: None,
            decimals: 9,
            supply: 1_000_000_000,
            steps: vec![StepRecord {
                step: MintStep::CreateMint,
                signature: "sig".to_string(),
            }],
        };
        let err = LaunchpadError::MintAborted {
            step: MintStep::CreateAssociatedAccount,
            source: Box::new(WalletError::Rejected("User rejected".to_string()).into()),
            report: Box::new(report.clone()),
        };
        (err, report)
    }

    fn get(target: &JsValue, key: &str) -> JsValue {
        Reflect::get(target, &key.into()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_aborted_mint_throws_step_and_report() {
        let (err, report) = aborted();
        let js: JsValue = err.into();

        assert!(js.is_instance_of::<js_sys::Error>());
        assert_eq!(
            get(&js, "step").as_string().as_deref(),
            Some("createAssociatedAccount")
        );

        let js_report = get(&js, "report");
        assert_eq!(get(&js_report, "mint").as_string(), Some(report.mint.clone()));
        let keypair = get(&js_report, "mintKeypair");
        assert_eq!(
            get(&keypair, "secretKey").as_string(),
            Some(report.mint_keypair.secret_key.clone())
        );
        let restored =
            Keypair::from_base58_secret(&get(&keypair, "secretKey").as_string().unwrap())
                .unwrap();
        assert_eq!(restored.address(), report.mint);

        // Same plain-object shape as a successful report
        assert!(get(&js_report, "associatedAccount").is_null());
        assert_eq!(get(&js_report, "supply").as_string().as_deref(), Some("1000000000"));
        let steps = js_sys::Array::from(&get(&js_report, "steps"));
        assert_eq!(steps.length(), 1);
    }

    #[wasm_bindgen_test]
    fn test_plain_errors_carry_no_report() {
        let js: JsValue = LaunchpadError::invalid_input("name must not be empty").into();
        let message = js.dyn_ref::<js_sys::Error>().unwrap().message();
        assert_eq!(String::from(message), "Invalid input: name must not be empty");
        assert!(get(&js, "report").is_undefined());
        assert!(get(&js, "step").is_undefined());
    }
}
