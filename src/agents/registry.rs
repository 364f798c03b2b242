//! Agent registry: player type tag -> agent constructor.
//!
//! Tags are matched case-insensitively. The engine only ever sees the
//! [`Agent`] trait; which concrete agents exist is decided here.

use rustc_hash::FxHashMap;

use super::{normalize_tag, Agent, ConsoleAgent, LowestDieAgent, AI_REFLEX, HUMAN_CONSOLE};
use crate::error::PlayError;

/// Constructor for a boxed agent.
pub type AgentFactory = Box<dyn Fn() -> Box<dyn Agent>>;

/// Registry of agent constructors.
///
/// ## Example
///
/// ```
/// use lowball_dice::agents::{AgentRegistry, LowestDieAgent};
///
/// let mut registry = AgentRegistry::new();
/// registry.register("cautious", || Box::new(LowestDieAgent));
///
/// assert!(registry.contains("CAUTIOUS"));
/// assert!(registry.create("cautious").is_ok());
/// assert!(registry.create("reckless").is_err());
/// ```
#[derive(Default)]
pub struct AgentRegistry {
    factories: FxHashMap<String, AgentFactory>,
}

impl AgentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in agents: `human_console` on stdio and
    /// `ai_reflex`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HUMAN_CONSOLE, || Box::new(ConsoleAgent::stdio()));
        registry.register(AI_REFLEX, || Box::new(LowestDieAgent));
        registry
    }

    /// Register (or replace) the constructor for a tag.
    pub fn register<F>(&mut self, tag: &str, factory: F)
    where
        F: Fn() -> Box<dyn Agent> + 'static,
    {
        self.factories.insert(normalize_tag(tag), Box::new(factory));
    }

    /// Check if a tag has a constructor.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(&normalize_tag(tag))
    }

    /// Build an agent for a tag.
    ///
    /// ## Errors
    ///
    /// `UnknownAgent` if the tag is empty or unregistered.
    pub fn create(&self, tag: &str) -> Result<Box<dyn Agent>, PlayError> {
        self.factories
            .get(&normalize_tag(tag))
            .map(|factory| factory())
            .ok_or_else(|| PlayError::UnknownAgent(tag.to_string()))
    }

    /// Get the number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Die;

    #[test]
    fn test_defaults() {
        let registry = AgentRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(HUMAN_CONSOLE));
        assert!(registry.contains(AI_REFLEX));
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        let registry = AgentRegistry::with_defaults();
        assert!(registry.contains("AI_Reflex"));
        assert!(registry.create("AI_REFLEX").is_ok());
    }

    #[test]
    fn test_unknown_and_empty_tags() {
        let registry = AgentRegistry::with_defaults();
        assert!(matches!(registry.create("oracle"), Err(PlayError::UnknownAgent(tag)) if tag == "oracle"));
        assert!(matches!(registry.create(""), Err(PlayError::UnknownAgent(_))));
    }

    #[test]
    fn test_created_agent_plays() {
        let registry = AgentRegistry::with_defaults();
        let game = GameConfig::default().build(1);
        let mut agent = registry.create(AI_REFLEX).unwrap();

        let kept = agent
            .choose_keep(&[Die::plain(5), Die::plain(2)], &game.players[1], &[], &game)
            .unwrap();
        assert_eq!(kept.as_slice(), &[Die::plain(2)]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = AgentRegistry::new();
        assert!(registry.is_empty());

        registry.register("bot", || Box::new(LowestDieAgent));
        registry.register("BOT", || Box::new(LowestDieAgent));
        assert_eq!(registry.len(), 1);
    }
}
