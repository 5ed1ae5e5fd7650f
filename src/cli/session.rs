use clap::Parser;

use crate::session::User;

#[derive(Parser)]
pub struct SessionArgs {
    /// Signed-in user identifier, scopes the overview to the user's environments.
    #[clap(long = "user-id", env = "USER_ID", global = true)]
    user_id: Option<String>,

    #[clap(long = "user-name", env = "USER_NAME", global = true)]
    user_name: Option<String>,

    #[clap(long = "user-email", env = "USER_EMAIL", global = true)]
    user_email: Option<String>,
}

impl SessionArgs {
    /// The user to sign in, when an identifier is given.
    pub fn user(&self) -> Option<User> {
        self.user_id.as_ref().map(|user_id| User {
            email: self.user_email.clone(),
            name: self.user_name.clone(),
            ..User::new(user_id.as_str())
        })
    }
}
