use crate::document::Document;
use crate::prompt::Prompt;

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all fields.";

#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

pub const REGISTER_FORM: FormSpec = FormSpec {
    name: "registerForm",
    fields: &["first_name", "last_name", "email", "password", "security_answer"],
};

pub const FORGOT_PASSWORD_FORM: FormSpec = FormSpec {
    name: "forgotPasswordForm",
    fields: &["third_letter", "email", "security_answer"],
};

/// Required fields whose trimmed value is empty. An absent form or field
/// counts as empty.
pub fn missing_fields<D: Document + ?Sized>(document: &D, form: &FormSpec) -> Vec<&'static str> {
    form.fields
        .iter()
        .copied()
        .filter(|field| {
            document
                .form_field(form.name, field)
                .is_none_or(|value| value.trim().is_empty())
        })
        .collect()
}

/// Returns `true` when submission may proceed.
pub fn validate_form<D, P>(document: &D, prompt: &P, form: &FormSpec) -> bool
where
    D: Document + ?Sized,
    P: Prompt + ?Sized,
{
    if missing_fields(document, form).is_empty() {
        return true;
    }
    prompt.alert(MISSING_FIELDS_ALERT);
    false
}

pub fn validate_register_form<D, P>(document: &D, prompt: &P) -> bool
where
    D: Document + ?Sized,
    P: Prompt + ?Sized,
{
    validate_form(document, prompt, &REGISTER_FORM)
}

pub fn validate_forgot_password_form<D, P>(document: &D, prompt: &P) -> bool
where
    D: Document + ?Sized,
    P: Prompt + ?Sized,
{
    validate_form(document, prompt, &FORGOT_PASSWORD_FORM)
}
