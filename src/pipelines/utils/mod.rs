use candle_core::{DType, Device};
use serde::Deserialize;
use tracing::info;

/// Picks CUDA device 0 if available, then Metal device 0, and otherwise
/// falls back to CPU.
pub fn load_device() -> Device {
    if let Ok(device) = Device::new_cuda(0) {
        info!("using CUDA device 0");
        return device;
    }
    if let Ok(device) = Device::new_metal(0) {
        info!("using Metal device 0");
        return device;
    }
    info!("using CPU");
    Device::Cpu
}

/// Request for a specific device, used by pipeline builders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceRequest {
    /// Use CUDA or Metal if available, otherwise CPU (default behavior).
    #[default]
    Default,
    /// Force CPU even if an accelerator is available.
    Cpu,
    /// Select a specific CUDA device by index.
    Cuda(usize),
    /// Select a specific Metal device by index.
    Metal(usize),
    /// Provide an already constructed device.
    #[serde(skip)]
    Explicit(Device),
}

impl DeviceRequest {
    /// Resolve the request into an actual [`Device`].
    ///
    /// Explicit CUDA or Metal requests fail when the backend was not compiled in
    /// or the device does not exist.
    pub fn resolve(self) -> anyhow::Result<Device> {
        match self {
            DeviceRequest::Default => Ok(load_device()),
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => Device::new_cuda(i)
                .map_err(|e| anyhow::anyhow!("CUDA device {i} unavailable: {e}")),
            DeviceRequest::Metal(i) => Device::new_metal(i)
                .map_err(|e| anyhow::anyhow!("Metal device {i} unavailable: {e}")),
            DeviceRequest::Explicit(d) => Ok(d),
        }
    }
}

/// Trait providing convenience methods for pipeline builders to select a device.
pub trait DeviceSelectable: Sized {
    /// Returns a mutable reference to the builder's internal [`DeviceRequest`].
    fn device_request_mut(&mut self) -> &mut DeviceRequest;

    /// Force the pipeline to run on CPU.
    fn cpu(mut self) -> Self {
        *self.device_request_mut() = DeviceRequest::Cpu;
        self
    }

    /// Select a specific CUDA device by index.
    fn cuda_device(mut self, index: usize) -> Self {
        *self.device_request_mut() = DeviceRequest::Cuda(index);
        self
    }

    /// Select a specific Metal device by index.
    fn metal_device(mut self, index: usize) -> Self {
        *self.device_request_mut() = DeviceRequest::Metal(index);
        self
    }

    /// Provide an explicit [`Device`].
    fn device(mut self, device: Device) -> Self {
        *self.device_request_mut() = DeviceRequest::Explicit(device);
        self
    }
}

/// Precision the model weights are loaded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDType {
    #[default]
    F32,
    F16,
    BF16,
}

impl WeightDType {
    pub fn dtype(self) -> DType {
        match self {
            WeightDType::F32 => DType::F32,
            WeightDType::F16 => DType::F16,
            WeightDType::BF16 => DType::BF16,
        }
    }
}
