//! Signup form state and its synchronous transitions.
//!
//! DESIGN
//! ======
//! Field values and the nickname check status live together in
//! `SignupState` so one signal update keeps them consistent: editing the
//! nickname and clearing a stale availability error happen in the same
//! mutation. Async orchestration lives in `pages::signup_flow`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::error::ApiError;
use crate::net::types::CreateUserRequest;

pub const NICKNAME_TAKEN: &str = "이미 사용 중인 별명입니다.";
pub const NICKNAME_CHECK_FAILED: &str = "별명 확인 중 오류가 발생했습니다.";

/// The six inputs of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Nickname,
    Email,
    Password,
    ConfirmPassword,
    Birthdate,
}

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `YYYY-MM-DD` from the date input, or empty.
    pub birthdate: String,
}

impl SignupForm {
    pub fn set(&mut self, field: SignupField, value: String) {
        *self.field_mut(field) = value;
    }

    #[must_use]
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Nickname => &self.nickname,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::Birthdate => &self.birthdate,
        }
    }

    fn field_mut(&mut self, field: SignupField) -> &mut String {
        match field {
            SignupField::Username => &mut self.username,
            SignupField::Nickname => &mut self.nickname,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::Birthdate => &mut self.birthdate,
        }
    }
}

/// Nickname availability status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NicknameCheck {
    #[default]
    Idle,
    /// A check request is in flight; submit is disabled.
    Checking,
    /// The last check failed or found the nickname taken.
    Error(String),
}

/// Local reasons to refuse a submission before any request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,
    #[error("별명 중복을 확인해주세요.")]
    NicknameUnverified,
}

/// Everything the signup page owns for one visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub form: SignupForm,
    pub nickname_check: NicknameCheck,
}

impl SignupState {
    /// Apply user input. Any nickname edit drops the check status back to
    /// `Idle`, even while a check is in flight.
    pub fn set_field(&mut self, field: SignupField, value: String) {
        self.form.set(field, value);
        if field == SignupField::Nickname {
            self.nickname_check = NicknameCheck::Idle;
        }
    }

    /// Enter `Checking` and return the nickname to query, or `None` when the
    /// nickname is blank and no request should be made.
    pub fn begin_nickname_check(&mut self) -> Option<String> {
        if self.form.nickname.trim().is_empty() {
            return None;
        }
        self.nickname_check = NicknameCheck::Checking;
        Some(self.form.nickname.clone())
    }

    /// Record a check result. Results are applied in arrival order.
    pub fn finish_nickname_check(&mut self, result: &Result<bool, ApiError>) {
        self.nickname_check = match result {
            Ok(false) => NicknameCheck::Idle,
            Ok(true) => NicknameCheck::Error(NICKNAME_TAKEN.to_owned()),
            Err(_) => NicknameCheck::Error(NICKNAME_CHECK_FAILED.to_owned()),
        };
    }

    #[must_use]
    pub fn is_checking(&self) -> bool {
        matches!(self.nickname_check, NicknameCheck::Checking)
    }

    #[must_use]
    pub fn nickname_error(&self) -> Option<&str> {
        match &self.nickname_check {
            NicknameCheck::Error(message) => Some(message.as_str()),
            NicknameCheck::Idle | NicknameCheck::Checking => None,
        }
    }

    /// Run the local guards and build the registration body.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejection::PasswordMismatch`] when the two password
    /// fields differ, then [`SubmitRejection::NicknameUnverified`] when the
    /// nickname check is in `Error`.
    pub fn submission(&self) -> Result<CreateUserRequest, SubmitRejection> {
        let form = &self.form;
        if form.password != form.confirm_password {
            return Err(SubmitRejection::PasswordMismatch);
        }
        if self.nickname_error().is_some() {
            return Err(SubmitRejection::NicknameUnverified);
        }
        Ok(CreateUserRequest {
            username: form.username.clone(),
            nickname: form.nickname.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            password_confirm: form.password.clone(),
            birth_date: form.birthdate.clone(),
        })
    }
}
