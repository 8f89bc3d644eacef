use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage { label, message } => {
                self.status_message = Some(format_status(&label, &message));
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                if self.status_message.take().is_some() {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            SystemMsg::ShowError(error) => {
                let cmd = Cmd::log_error(error.clone());
                self.status_message = Some(format!("Error: {error}"));
                vec![cmd, Cmd::RequestRender]
            }
        }
    }
}

/// `[label] message` on a single line
fn format_status(label: &str, message: &str) -> String {
    let message = message.replace(['\n', '\r'], " ");
    format!("[{label}] {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_status_message() {
        let mut system = SystemState::default();
        assert!(system.status_message.is_none());

        let cmds = system.update(SystemMsg::status("Moved", "Task 2\nto Done"));

        assert_eq!(
            system.status_message.as_deref(),
            Some("[Moved] Task 2 to Done")
        );
        assert_eq!(cmds, vec![Cmd::RequestRender]);

        let cmds = system.update(SystemMsg::ClearStatusMessage);
        assert!(system.status_message.is_none());
        assert_eq!(cmds, vec![Cmd::RequestRender]);

        let cmds = system.update(SystemMsg::ClearStatusMessage);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_show_error() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("boom".into()));

        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(cmds, vec![Cmd::log_error("boom"), Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }
}
