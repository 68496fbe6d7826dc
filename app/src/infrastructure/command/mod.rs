mod scp;
mod ssh_proxy;

pub use self::{
    scp::Scp,
    ssh_proxy::{shell_quote, MaybeSsh, SshConfig},
};
