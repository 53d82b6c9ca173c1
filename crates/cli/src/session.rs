//! Interactive console session: prompts and the login/signup loop.
//!
//! Generic over the input and output streams so the flow can be driven
//! from tests. Passwords go through a [`SecretReader`] when one is set.

use anyhow::{Context, Result};
use auth::{AuthError, Authenticator, UserStore};
use dispatcher::Mode;
use std::io::{self, BufRead, Write};

/// Reads input that must not echo while typed
pub trait SecretReader {
    /// `None` at end of input
    fn read_secret(&mut self, message: &str) -> Result<Option<String>>;
}

/// Reads from the controlling terminal with echo disabled
pub struct HiddenInput;

impl SecretReader for HiddenInput {
    fn read_secret(&mut self, message: &str) -> Result<Option<String>> {
        match rpassword::prompt_password(message) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read password"),
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    /// Falls back to the line input when unset (piped stdin)
    secrets: Option<Box<dyn SecretReader>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            secrets: None,
        }
    }

    /// Read passwords through `reader` (builder pattern)
    pub fn with_secret_reader(mut self, reader: impl SecretReader + 'static) -> Self {
        self.secrets = Some(Box::new(reader));
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_password(&mut self, message: &str) -> Result<Option<String>> {
        match self.secrets.as_mut() {
            Some(secrets) => secrets.read_secret(message),
            None => self.prompt(message),
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Loop on login / signup / exit until the user is authenticated.
    ///
    /// Returns `false` when the user exits or input ends.
    pub fn authenticate<S: UserStore>(&mut self, auth: &Authenticator<S>) -> Result<bool> {
        loop {
            let Some(choice) = self.prompt("Do you want to login or signup? (login/signup/exit): ")? else {
                return Ok(false);
            };

            let outcome = match choice.to_lowercase().as_str() {
                "login" => self.login(auth)?,
                "signup" => self.signup(auth)?,
                "exit" => {
                    self.say("Exiting the application. Goodbye!")?;
                    return Ok(false);
                }
                _ => {
                    self.say("Invalid choice. Please enter 'login', 'signup', or 'exit'.")?;
                    continue;
                }
            };

            match outcome {
                Some(true) => return Ok(true),
                Some(false) => continue,
                None => return Ok(false),
            }
        }
    }

    /// `Some(true)` on success, `Some(false)` on a rejected attempt,
    /// `None` at end of input
    fn login<S: UserStore>(&mut self, auth: &Authenticator<S>) -> Result<Option<bool>> {
        let Some(username) = self.prompt("Enter your username: ")? else {
            return Ok(None);
        };
        if !auth.user_exists(&username)? {
            self.say(&AuthError::UnknownUser.to_string())?;
            return Ok(Some(false));
        }

        let Some(password) = self.read_password("Enter your password: ")? else {
            return Ok(None);
        };
        match auth.login(&username, &password) {
            Ok(()) => {
                self.say("Login successful!")?;
                Ok(Some(true))
            }
            Err(e @ (AuthError::UnknownUser | AuthError::IncorrectPassword)) => {
                self.say(&e.to_string())?;
                Ok(Some(false))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn signup<S: UserStore>(&mut self, auth: &Authenticator<S>) -> Result<Option<bool>> {
        let Some(username) = self.prompt("Enter a new username: ")? else {
            return Ok(None);
        };
        // Reject a taken name before asking for passwords
        if auth.user_exists(&username)? {
            self.say(&AuthError::UsernameTaken.to_string())?;
            return Ok(Some(false));
        }

        let Some(password) = self.read_password("Enter a new password: ")? else {
            return Ok(None);
        };
        let Some(confirmation) = self.read_password("Confirm your password: ")? else {
            return Ok(None);
        };

        match auth.signup(&username, &password, &confirmation) {
            Ok(()) => {
                self.say("Signup successful! Kindly login.")?;
                Ok(Some(true))
            }
            Err(
                e @ (AuthError::UsernameTaken | AuthError::PasswordMismatch | AuthError::EmptyUsername),
            ) => {
                self.say(&e.to_string())?;
                Ok(Some(false))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ask for the mode. `Ok(None)` on end of input or an invalid choice,
    /// which is reported to the user.
    pub fn choose_mode(&mut self) -> Result<Option<Mode>> {
        let Some(choice) = self.prompt(r#"Enter "B" for books, "M" for movies, or "BH" for both: "#)? else {
            return Ok(None);
        };
        match choice.parse::<Mode>() {
            Ok(mode) => Ok(Some(mode)),
            Err(e) => {
                self.say(&e.to_string())?;
                Ok(None)
            }
        }
    }

    /// Ask for the search query, worded for `mode`
    pub fn ask_query(&mut self, mode: Mode) -> Result<Option<String>> {
        let message = match mode {
            Mode::Books => "Enter your book search query: ",
            Mode::Movies => "Enter your movie search query: ",
            Mode::Both => "Enter your search query: ",
        };
        self.prompt(message)
    }
}
