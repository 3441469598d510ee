use bevy::prelude::*;

use crate::engine::render::driver::TextureKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

impl TextureStatus {
    pub fn is_resolved(self) -> bool {
        !matches!(self, TextureStatus::Pending)
    }
}

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settings_loaded: bool,
    pub textures_resolved: bool,
    pub texture_states: Vec<(TextureKind, TextureStatus)>,
    pub textures_configured: bool,
}

impl LoadingProgress {
    /// Record a texture's status. Returns true the first time it resolves.
    pub fn update_texture(&mut self, kind: TextureKind, status: TextureStatus) -> bool {
        match self.texture_states.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, current)) => {
                let newly_resolved = !current.is_resolved() && status.is_resolved();
                if !current.is_resolved() {
                    *current = status;
                }
                newly_resolved
            }
            None => {
                self.texture_states.push((kind, status));
                status.is_resolved()
            }
        }
    }

    pub fn status(&self, kind: TextureKind) -> Option<TextureStatus> {
        self.texture_states
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, status)| *status)
    }

    pub fn all_textures_resolved(&self, expected: usize) -> bool {
        self.texture_states.len() == expected
            && self
                .texture_states
                .iter()
                .all(|(_, status)| status.is_resolved())
    }

    pub fn failed_textures(&self) -> usize {
        self.texture_states
            .iter()
            .filter(|(_, status)| *status == TextureStatus::Failed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_reported_once() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.update_texture(TextureKind::Planet, TextureStatus::Pending));
        assert!(progress.update_texture(TextureKind::Planet, TextureStatus::Loaded));
        assert!(!progress.update_texture(TextureKind::Planet, TextureStatus::Loaded));
    }

    #[test]
    fn resolved_status_is_sticky() {
        let mut progress = LoadingProgress::default();
        progress.update_texture(TextureKind::Rover, TextureStatus::Failed);
        progress.update_texture(TextureKind::Rover, TextureStatus::Pending);
        assert_eq!(progress.failed_textures(), 1);
    }

    #[test]
    fn waits_for_every_texture() {
        let mut progress = LoadingProgress::default();
        progress.update_texture(TextureKind::Planet, TextureStatus::Loaded);
        progress.update_texture(TextureKind::Rover, TextureStatus::Failed);
        assert!(!progress.all_textures_resolved(3));

        progress.update_texture(TextureKind::Starfield, TextureStatus::Pending);
        assert!(!progress.all_textures_resolved(3));

        progress.update_texture(TextureKind::Starfield, TextureStatus::Loaded);
        assert!(progress.all_textures_resolved(3));
    }

    #[test]
    fn status_reports_each_kind() {
        let mut progress = LoadingProgress::default();
        progress.update_texture(TextureKind::Planet, TextureStatus::Failed);
        progress.update_texture(TextureKind::Rover, TextureStatus::Loaded);
        assert_eq!(progress.status(TextureKind::Planet), Some(TextureStatus::Failed));
        assert_eq!(progress.status(TextureKind::Rover), Some(TextureStatus::Loaded));
        assert_eq!(progress.status(TextureKind::Starfield), None);
    }
}
