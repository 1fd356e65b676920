use std::rc::Rc;

use platform_host::{
    CapabilityStatus, GenerationConfig, HostCapabilities, HostServices, HostStrategy,
};

use crate::{ClerkIdentityProvider, WebGenerationService};

/// Returns the host strategy for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

fn generation_status(config: &GenerationConfig) -> CapabilityStatus {
    if config.credential().is_ok() {
        CapabilityStatus::Available
    } else {
        CapabilityStatus::RequiresConfiguration
    }
}

/// Assembles the runtime host bundle for the active target.
///
/// Browser builds wire Clerk and the `fetch` generation client configured from
/// `DESKTOP_AI_*` build variables; native builds get [`HostServices::headless`].
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            let config = GenerationConfig::from_build_env();
            HostServices {
                capabilities: HostCapabilities {
                    // Clerk readiness is re-checked per prompt through `IdentityProvider::is_ready`.
                    identity: CapabilityStatus::Available,
                    generation: generation_status(&config),
                },
                identity: Rc::new(ClerkIdentityProvider),
                generation: Rc::new(WebGenerationService::new(config)),
                host_strategy: HostStrategy::Browser,
            }
        }
        HostStrategy::Headless => HostServices::headless(),
    }
}
