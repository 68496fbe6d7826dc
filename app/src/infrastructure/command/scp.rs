use std::path::Path;

use tokio::process::Command;

use super::ssh_proxy::SshConfig;

/// Copy a local file to the ssh proxy, `None` when running locally.
pub trait Scp {
    fn scp(&self, local: &Path, remote: &str) -> Option<Command>;
}

impl<Ctx> Scp for Ctx
where
    Ctx: AsRef<Option<SshConfig>>,
{
    fn scp(&self, local: &Path, remote: &str) -> Option<Command> {
        self.as_ref().as_ref().map(|ssh| {
            let mut command = Command::new("scp");
            command
                .args(["-P", &ssh.port])
                .arg(local)
                .arg(format!("{}:{remote}", ssh.destination));
            command
        })
    }
}
