// Binding configuration and remapping

use super::action::{default_p1_bindings, global_bindings, Control, InputSource};
use std::collections::HashMap;

/// Key/button bindings for one player
///
/// A source maps to exactly one control; a control may have several sources
/// (e.g. `A` and `ArrowLeft` both move left).
#[derive(Debug, Clone)]
pub struct InputConfig {
    player_id: usize,
    bindings: HashMap<InputSource, Control>,
    sources: HashMap<Control, Vec<InputSource>>,
}

impl InputConfig {
    /// An empty configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    pub fn from_bindings(player_id: usize, bindings: Vec<(InputSource, Control)>) -> Self {
        let mut config = Self::new(player_id);
        for (source, control) in bindings {
            config.bind(source, control);
        }
        config
    }

    /// Default layout for a player; only player one has local bindings
    pub fn defaults_for(player_id: usize) -> Self {
        let bindings = if player_id == 0 {
            default_p1_bindings()
        } else {
            Vec::new()
        };
        Self::from_bindings(player_id, bindings)
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind a source, replacing whatever it was bound to before
    pub fn bind(&mut self, source: InputSource, control: Control) {
        self.unbind_source(source);
        self.bindings.insert(source, control);
        self.sources.entry(control).or_default().push(source);
    }

    pub fn unbind_source(&mut self, source: InputSource) {
        let Some(control) = self.bindings.remove(&source) else {
            return;
        };
        if let Some(sources) = self.sources.get_mut(&control) {
            sources.retain(|s| *s != source);
            if sources.is_empty() {
                self.sources.remove(&control);
            }
        }
    }

    /// Remove every source bound to a control
    pub fn unbind_control(&mut self, control: Control) {
        for source in self.sources.remove(&control).unwrap_or_default() {
            self.bindings.remove(&source);
        }
    }

    pub fn control_for(&self, source: InputSource) -> Option<Control> {
        self.bindings.get(&source).copied()
    }

    pub fn sources_for(&self, control: Control) -> &[InputSource] {
        self.sources.get(&control).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_binding(&self, control: Control) -> bool {
        self.sources.contains_key(&control)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.sources.clear();
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::defaults_for(self.player_id);
    }
}

/// Per-player configurations plus player-independent bindings
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
    global: InputConfig,
}

impl InputConfigManager {
    pub fn new(max_players: usize) -> Self {
        Self {
            configs: (0..max_players).map(InputConfig::defaults_for).collect(),
            global: InputConfig::from_bindings(usize::MAX, global_bindings()),
        }
    }

    pub fn config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    pub fn config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_id)
    }

    pub fn global(&self) -> &InputConfig {
        &self.global
    }

    /// Resolve a source for a player; player bindings win over global ones
    pub fn resolve(&self, player_id: usize, source: InputSource) -> Option<Control> {
        self.config(player_id)
            .and_then(|config| config.control_for(source))
            .or_else(|| self.global.control_for(source))
    }

    pub fn reset_all_to_defaults(&mut self) {
        for config in &mut self.configs {
            config.reset_to_defaults();
        }
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_and_resolve() {
        let mut config = InputConfig::new(0);
        let source = InputSource::key(KeyCode::KeyQ);
        config.bind(source, Control::Dash);
        assert_eq!(config.control_for(source), Some(Control::Dash));
        assert_eq!(config.sources_for(Control::Dash), &[source]);
    }

    #[test]
    fn test_rebind_source_moves_it() {
        let mut config = InputConfig::new(0);
        let source = InputSource::key(KeyCode::KeyQ);
        config.bind(source, Control::Punch);
        config.bind(source, Control::Kick);

        assert_eq!(config.control_for(source), Some(Control::Kick));
        assert!(!config.has_binding(Control::Punch));
    }

    #[test]
    fn test_unbind_control_removes_all_sources() {
        let mut config = InputConfig::defaults_for(0);
        assert!(config.sources_for(Control::Jump).len() >= 2);

        config.unbind_control(Control::Jump);
        assert!(!config.has_binding(Control::Jump));
        assert_eq!(config.control_for(InputSource::key(KeyCode::Space)), None);
    }

    #[test]
    fn test_unbind_source_keeps_siblings() {
        let mut config = InputConfig::defaults_for(0);
        config.unbind_source(InputSource::key(KeyCode::Space));
        assert!(config.has_binding(Control::Jump));
        assert_eq!(
            config.control_for(InputSource::key(KeyCode::KeyW)),
            Some(Control::Jump)
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::defaults_for(0);
        config.clear();
        assert!(!config.has_binding(Control::Dash));

        config.reset_to_defaults();
        assert!(config.has_binding(Control::Dash));
    }

    #[test]
    fn test_remote_players_have_no_local_bindings() {
        let config = InputConfig::defaults_for(1);
        assert!(!config.has_binding(Control::Jump));
    }

    #[test]
    fn test_manager_player_then_global() {
        let manager = InputConfigManager::new(2);
        assert_eq!(
            manager.resolve(0, InputSource::key(KeyCode::KeyJ)),
            Some(Control::Punch)
        );
        assert_eq!(
            manager.resolve(1, InputSource::key(KeyCode::Escape)),
            Some(Control::Menu)
        );
        assert_eq!(manager.resolve(1, InputSource::key(KeyCode::KeyJ)), None);
    }

    #[test]
    fn test_manager_reset_all() {
        let mut manager = InputConfigManager::new(1);
        if let Some(config) = manager.config_mut(0) {
            config.clear();
        }
        manager.reset_all_to_defaults();
        assert!(manager
            .config(0)
            .is_some_and(|c| c.has_binding(Control::MoveLeft)));
    }
}
