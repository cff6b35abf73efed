//! Utilities for selecting the best adapter for the current system
//!
//! This module contains functions that help in selecting the best adapter for the current system based on the following criteria:
//! - Feature support (currently none)
//! - Type of adapter (CPU, Integrated GPU, Discrete GPU, etc.)
//! - Backend (Vulkan, DX12, Metal, etc.)
//!
//! Scores are computed from the [`AdapterInfo`] alone, so they can be checked without a GPU.

use tracing::{info, warn};
use wgpu::{Adapter, AdapterInfo, Backend, DeviceType};

/// Used to weight the importance of feature support
///
/// Feature support is the most important since it determines if the adapter can be used at all.
const FEATURE_SCORE_WEIGHT: i8 = 3;

/// Used to weight the importance of the type of adapter
///
/// The type of adapter is the second most important since it determines the performance of the adapter.
const TYPE_SCORE_WEIGHT: i8 = 2;

/// Used to weight the importance of the backend
///
/// The backend is the least important since it only determines the API used.
const BACKEND_SCORE_WEIGHT: i8 = 1;

/// Type alias for the score of an adapter
pub type Score = i8;

/// Returns the adapter with the highest score.
///
/// CPU adapters are only considered when nothing else is available, since headless machines
/// often only have a software rasterizer. Returns [`None`] when `adapters` is empty.
///
/// # Examples
/// ```no_run
/// # let instance = wgpu::Instance::default();
/// let adapters = instance.enumerate_adapters(wgpu::Backends::all());
/// let adapter = refract::graphics::adapter_selection_utils::get_best_adapter(adapters);
/// ```
pub fn get_best_adapter(adapters: Vec<Adapter>) -> Option<Adapter> {
    let infos: Vec<AdapterInfo> = adapters.iter().map(Adapter::get_info).collect();
    let index = best_adapter_index(&infos)?;

    adapters.into_iter().nth(index)
}

/// Index of the best adapter in `infos`, see [`get_best_adapter`]
pub fn best_adapter_index(infos: &[AdapterInfo]) -> Option<usize> {
    let hardware: Vec<usize> = (0..infos.len())
        .filter(|i| !is_unwanted_adapter(&infos[*i]))
        .collect();

    let candidates = if hardware.is_empty() {
        if !infos.is_empty() {
            warn!("Only CPU adapters are available, rendering will be slow");
        }
        (0..infos.len()).collect()
    } else {
        hardware
    };

    let mut scores: Vec<(usize, Score)> = candidates
        .into_iter()
        .map(|i| (i, get_adapter_score(&infos[i])))
        .collect();

    // Highest score first, the earlier adapter wins ties
    scores.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (i, score) in scores.iter() {
        info!(
            "Adapter: {} with {:?}; Score: {}",
            infos[*i].name, infos[*i].backend, score
        );
    }

    scores.first().map(|(i, _)| *i)
}

/// Gets the score of an individual adapter based on the criteria
pub fn get_adapter_score(info: &AdapterInfo) -> Score {
    get_feature_score(info) * FEATURE_SCORE_WEIGHT
        + get_type_score(info) * TYPE_SCORE_WEIGHT
        + get_backend_score(info) * BACKEND_SCORE_WEIGHT
}

/// CPU adapters are unwanted
fn is_unwanted_adapter(info: &AdapterInfo) -> bool {
    info.device_type == DeviceType::Cpu
}

/// Gets the unweighted score of an adapter based on feature support
///
/// Currently, it always returns 0 since there are no features to check for.
fn get_feature_score(_info: &AdapterInfo) -> Score {
    0
}

/// Gets the unweighted score of an adapter based on the backend
///
/// Returns 0 when the backend is not supported on the current platform
fn get_backend_score(info: &AdapterInfo) -> Score {
    #[cfg(target_os = "windows")]
    let score = match info.backend {
        Backend::Empty | Backend::BrowserWebGpu | Backend::Metal => 0,
        Backend::Gl => 1,
        Backend::Vulkan => 2,
        Backend::Dx12 => 3,
    };

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    let score = match info.backend {
        Backend::Empty | Backend::BrowserWebGpu | Backend::Dx12 => 0,
        Backend::Gl => 1,
        Backend::Vulkan => 2,
        Backend::Metal => 3,
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "ios")))]
    let score = match info.backend {
        Backend::Empty | Backend::BrowserWebGpu | Backend::Dx12 | Backend::Metal => 0,
        Backend::Gl => 1,
        Backend::Vulkan => 2,
    };

    score
}

/// Gets the unweighted score of an adapter based on the type of adapter
fn get_type_score(info: &AdapterInfo) -> Score {
    match info.device_type {
        DeviceType::Other => 1,
        DeviceType::Cpu => -16,
        // Integrated GPUs are ranked the same as Virtual GPUs
        DeviceType::IntegratedGpu => 2,
        DeviceType::VirtualGpu => 2,
        DeviceType::DiscreteGpu => 3,
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use wgpu::{AdapterInfo, Backend, DeviceType};

    use super::{best_adapter_index, get_adapter_score};

    fn info(name: &str, device_type: DeviceType) -> AdapterInfo {
        AdapterInfo {
            name: name.to_string(),
            vendor: 0,
            device: 0,
            device_type,
            driver: String::new(),
            driver_info: String::new(),
            backend: Backend::Vulkan,
        }
    }

    #[test]
    fn prefers_discrete_gpu() {
        let infos = [
            info("integrated", DeviceType::IntegratedGpu),
            info("discrete", DeviceType::DiscreteGpu),
            info("other", DeviceType::Other),
        ];

        assert!(best_adapter_index(&infos) == Some(1));
    }

    #[test]
    fn skips_cpu_when_hardware_exists() {
        let infos = [
            info("llvmpipe", DeviceType::Cpu),
            info("other", DeviceType::Other),
        ];

        assert!(best_adapter_index(&infos) == Some(1));
    }

    #[test]
    fn falls_back_to_cpu() {
        let infos = [info("llvmpipe", DeviceType::Cpu)];

        assert!(best_adapter_index(&infos) == Some(0));
    }

    #[test]
    fn no_adapters() {
        assert!(best_adapter_index(&[]).is_none());
    }

    #[test]
    fn type_outweighs_backend() {
        let mut gl_discrete = info("gl", DeviceType::DiscreteGpu);
        gl_discrete.backend = Backend::Gl;
        let vulkan_integrated = info("vk", DeviceType::IntegratedGpu);

        assert!(get_adapter_score(&gl_discrete) > get_adapter_score(&vulkan_integrated));
    }
}
