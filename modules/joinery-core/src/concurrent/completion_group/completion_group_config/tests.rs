use super::{CompletionGroupConfig, UnderflowPolicy};

#[test]
fn default_policy_follows_build_profile() {
  let expected = if cfg!(debug_assertions) { UnderflowPolicy::Panic } else { UnderflowPolicy::ReturnError };
  assert_eq!(UnderflowPolicy::default(), expected);
  assert_eq!(CompletionGroupConfig::default().underflow_policy(), expected);
}

#[test]
fn builder_overrides_values() {
  let config =
    CompletionGroupConfig::default().with_underflow_policy(UnderflowPolicy::ReturnError).with_label("image-fetch");

  assert_eq!(config.underflow_policy(), UnderflowPolicy::ReturnError);
  assert!(!config.underflow_policy().panics());
  assert_eq!(config.label(), Some("image-fetch"));
  assert_eq!(config.label_or_default(), "image-fetch");
}

#[test]
fn setters_mutate_in_place() {
  let mut config = CompletionGroupConfig::new(UnderflowPolicy::ReturnError, Some("before"));
  config.set_underflow_policy(UnderflowPolicy::Panic);
  config.set_label(None);

  assert!(config.underflow_policy().panics());
  assert_eq!(config.label(), None);
  assert_eq!(config.label_or_default(), "completion_group");
}
