use super::Redirect;
use crate::client::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
  Login,
  Register,
}

/// Sign-in form. No account backend exists yet, so submitting only navigates home.
#[derive(Debug, Clone)]
pub struct LoginPage {
  pub mode: LoginMode,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
  pub auth_enabled: bool,
}

impl LoginPage {
  pub fn new(auth_enabled: bool) -> Self {
    if !auth_enabled {
      log::warn!("No public API key configured, login is a stub");
    }

    LoginPage {
      mode: LoginMode::Login,
      email: String::new(),
      password: String::new(),
      confirm_password: String::new(),
      auth_enabled,
    }
  }

  pub fn title(&self) -> &'static str {
    match self.mode {
      LoginMode::Login => "Login",
      LoginMode::Register => "Register",
    }
  }

  pub fn toggle_prompt(&self) -> (&'static str, &'static str) {
    match self.mode {
      LoginMode::Login => ("Don't have an account? ", "Register here"),
      LoginMode::Register => ("Already have an account? ", "Login here"),
    }
  }

  pub fn toggle(&mut self) {
    self.mode = match self.mode {
      LoginMode::Login => LoginMode::Register,
      LoginMode::Register => LoginMode::Login,
    };
  }

  pub fn submit(&self) -> Result<Redirect, String> {
    if self.email.trim().is_empty() || self.password.is_empty() {
      return Err("Email and password are required".to_owned());
    }

    log::info!("{} submitted for {}", self.title(), self.email);

    let notice = match self.mode {
      LoginMode::Login => "Login successful!",
      LoginMode::Register => "Registration successful!",
    };

    Ok(Redirect::new(Route::Home, notice))
  }
}
