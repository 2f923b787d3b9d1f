//! Error types for the backdrop.
//!
//! GPU acquisition failures are startup-fatal: there is no transient cause a
//! retry would fix, so initialization aborts instead of retrying.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    Adapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::Adapter(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::Adapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the backdrop.
#[derive(Debug)]
pub enum BackdropError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for BackdropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackdropError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            BackdropError::Window(e) => write!(f, "Failed to create window: {}", e),
            BackdropError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for BackdropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackdropError::EventLoop(e) => Some(e),
            BackdropError::Window(e) => Some(e),
            BackdropError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for BackdropError {
    fn from(e: winit::error::EventLoopError) -> Self {
        BackdropError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for BackdropError {
    fn from(e: winit::error::OsError) -> Self {
        BackdropError::Window(e)
    }
}

impl From<GpuError> for BackdropError {
    fn from(e: GpuError) -> Self {
        BackdropError::Gpu(e)
    }
}
