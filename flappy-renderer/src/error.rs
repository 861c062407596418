use thiserror::Error;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create a surface for the window")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter can present to the window")]
    NoAdapter,
    #[error("failed to open the graphics device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
