//! Process-wide codec registration.
//!
//! A conversion registers its decoder and encoder parameter sets for the
//! duration of the call. Registration is a guard: dropping it deregisters
//! both sets, so every exit path releases the registry. The guard also holds
//! the registry lock, so concurrent conversions take turns instead of
//! overwriting each other's registration.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::coding_parameters::{DecoderParameters, EncoderParameters};

struct RegistryState {
    decoder: Option<DecoderParameters>,
    encoder: Option<EncoderParameters>,
}

static REGISTRY: Mutex<RegistryState> = Mutex::new(RegistryState {
    decoder: None,
    encoder: None,
});

/// Scoped registration of the codec parameter sets.
pub struct CodecRegistration {
    decoder: DecoderParameters,
    encoder: EncoderParameters,
    guard: MutexGuard<'static, RegistryState>,
}

impl CodecRegistration {
    /// Registers both parameter sets, blocking while another conversion
    /// holds the registry.
    pub fn register(decoder: DecoderParameters, encoder: EncoderParameters) -> Self {
        let mut guard = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        guard.decoder = Some(decoder);
        guard.encoder = Some(encoder);
        Self {
            decoder,
            encoder,
            guard,
        }
    }

    pub fn decoder(&self) -> &DecoderParameters {
        &self.decoder
    }

    pub fn encoder(&self) -> &EncoderParameters {
        &self.encoder
    }
}

impl Drop for CodecRegistration {
    fn drop(&mut self) {
        self.guard.decoder = None;
        self.guard.encoder = None;
    }
}

/// Whether any parameter sets are currently registered. Blocks while a
/// registration is live; mainly useful to assert cleanup after the fact.
pub fn is_registered() -> bool {
    let state = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    state.decoder.is_some() || state.encoder.is_some()
}
