use crate::config::Config;
use crate::frontends::Frontend;
use crate::state::State;

/// Maintains current program state.
///
/// One `Manager` is owned by the host shell. It is the only writer of the window
/// registry; the frontend only ever reads.
#[derive(Debug)]
pub struct Manager<C, FRONTEND> {
    pub state: State,
    pub config: C,
    pub frontend: FRONTEND,
}

impl<C, FRONTEND> Manager<C, FRONTEND>
where
    C: Config,
    FRONTEND: Frontend,
{
    pub fn new(config: C) -> Self {
        let frontend = FRONTEND::new(&config);

        Self {
            state: State::new(&config),
            config,
            frontend,
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::frontends::MockFrontend> {
    pub fn new_test() -> Self {
        Self::new_test_with(crate::config::tests::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::tests::TestConfig) -> Self {
        Self::new(config)
    }
}
