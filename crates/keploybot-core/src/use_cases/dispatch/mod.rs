pub(crate) mod run_test_command;

pub use run_test_command::RunTestCommandInterface;

#[cfg(any(test, feature = "testkit"))]
pub use run_test_command::MockRunTestCommandInterface;
