/// Raw contents of the connect form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectForm {
    pub username: String,
    pub server_address: String,
}

/// Who we are and which server we poll. Lives for as long as the page does.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub server_address: String,
}

impl ConnectForm {
    /// Both fields must be non-blank. Values are kept as typed.
    pub fn session(&self) -> Option<Session> {
        if self.username.trim().is_empty() || self.server_address.trim().is_empty() {
            return None;
        }
        Some(Session {
            username: self.username.clone(),
            server_address: self.server_address.clone(),
        })
    }
}

/// One-way switch from the connect screen to the chat screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionGate {
    session: Option<Session>,
}

impl ConnectionGate {
    /// Opens the gate if the form is valid. Returns true only on the call that
    /// actually connects; once connected, further submissions are ignored.
    pub fn submit(&mut self, form: &ConnectForm) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = form.session();
        self.session.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
