//! # Profile form
//!
//! Validation and submission of the "Meu perfil" page. Every field is
//! checked (no early abort) and each failing field reports the first rule it
//! broke. Password fields are only validated and sent when the user typed
//! the current password.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::fetcher::ProfileClient;
use crate::{ApiError, UpdateProfileRequest, User};

pub const NAME_REQUIRED: &str = "Nome obrigatório";
pub const EMAIL_REQUIRED: &str = "E-mail obrigatório";
pub const EMAIL_INVALID: &str = "Digite um e-mail válido";
pub const PASSWORD_REQUIRED: &str = "Nova senha obrigatório";
pub const CONFIRMATION_REQUIRED: &str = "Confirmação de senha obrigatório";
pub const PASSWORD_TOO_SHORT: &str = "Mínimo de 6 dígitos";
pub const PASSWORDS_DIFFER: &str = "As senhas precisam ser iguais";

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    Email,
    OldPassword,
    Password,
    ConfirmPassword,
}

impl ProfileField {
    /// Input name used by the form
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::OldPassword => "old_password",
            ProfileField::Password => "password",
            ProfileField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Validation message per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ProfileField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ProfileField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: ProfileField, message: Option<&'static str>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

/// Current values of the profile inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Form prefilled with the user's name and e-mail
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::OldPassword => self.old_password = value,
            ProfileField::Password => self.password = value,
            ProfileField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }

    pub fn validate(&self) -> Result<UpdateProfileRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.insert(ProfileField::Name, required(&self.name, NAME_REQUIRED));
        errors.insert(
            ProfileField::Email,
            required(&self.email, EMAIL_REQUIRED).or_else(|| {
                (!validator::validate_email(self.email.as_str())).then_some(EMAIL_INVALID)
            }),
        );

        if self.changes_password() {
            errors.insert(
                ProfileField::Password,
                required(&self.password, PASSWORD_REQUIRED).or_else(|| min_length(&self.password)),
            );
            errors.insert(
                ProfileField::ConfirmPassword,
                required(&self.confirm_password, CONFIRMATION_REQUIRED)
                    .or_else(|| min_length(&self.confirm_password))
                    .or_else(|| self.confirmation_mismatch()),
            );
        } else {
            errors.insert(ProfileField::ConfirmPassword, self.confirmation_mismatch());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (old_password, password, confirm_password) = if self.changes_password() {
            (
                Some(self.old_password.clone()),
                Some(self.password.clone()),
                Some(self.confirm_password.clone()),
            )
        } else {
            (None, None, None)
        };

        Ok(UpdateProfileRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            old_password,
            password,
            confirm_password,
        })
    }

    fn confirmation_mismatch(&self) -> Option<&'static str> {
        (self.confirm_password != self.password).then_some(PASSWORDS_DIFFER)
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

fn min_length(value: &str) -> Option<&'static str> {
    (value.chars().count() < MIN_PASSWORD_LENGTH).then_some(PASSWORD_TOO_SHORT)
}

#[derive(Debug, Error)]
pub enum ProfileSubmitError {
    #[error("profile form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate the form and send it; returns the user as stored by the backend
pub async fn submit_profile<C: ProfileClient + ?Sized>(
    client: &C,
    form: &ProfileForm,
) -> Result<User, ProfileSubmitError> {
    let request = form.validate().map_err(ProfileSubmitError::Validation)?;

    info!(changes_password = form.changes_password(), "updating profile");
    let user = client.update_profile(&request).await.map_err(|e| {
        warn!(error = %e, "profile update failed");
        e
    })?;

    Ok(user)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Feedback message shown after a profile or avatar operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

impl Toast {
    pub fn profile_updated() -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Perfil atualizado",
            description: None,
        }
    }

    pub fn profile_update_failed() -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Erro na atualização do perfil",
            description: Some(
                "Ocorreu um erro ao fazer a atualização do perfil, tente novamente.",
            ),
        }
    }

    pub fn avatar_updated() -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Avatar atualizado com sucesso!",
            description: None,
        }
    }
}
