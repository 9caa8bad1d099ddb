use super::error::SurfaceError;
use super::scene::Scene;
use super::transform::Viewport;

/// The drawing surface the game loop renders into.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    fn resize(&mut self, width: u32, height: u32);

    /// Draws `scene` in order and presents it.
    fn present(&mut self, scene: &Scene) -> Result<(), SurfaceError>;

    /// Releases platform resources. No further calls follow.
    fn release(&mut self) {}
}
