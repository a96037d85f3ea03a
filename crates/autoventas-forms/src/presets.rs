//! Preset form configurations
//!
//! The site's four forms, expressed as configurations of the same engine:
//! contact, newsletter subscription, login, and registration. Field names,
//! bounds, and wording follow the site's templates.

use crate::field::FieldSpec;
use crate::form::FormState;
use crate::messages::MessageCatalog;
use crate::rules::Rule;
use autoventas_validators::StrengthTier;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 150;
const LOGIN_PASSWORD_MIN: usize = 6;
const REGISTER_PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;

/// The contact form: nombre / correo / mensaje.
///
/// # Examples
///
/// ```
/// use autoventas_forms::presets::contact_form;
///
/// let mut form = contact_form();
/// form.set_value("nombre", "Ana María");
/// form.set_value("correo", "ana@test.com");
/// form.set_value("mensaje", "Quisiera información del Corolla 2024");
/// assert!(form.validate());
/// ```
pub fn contact_form() -> FormState {
	let mut form = FormState::new();
	form.add_field(
		FieldSpec::new("nombre")
			.with_label("Nombre Completo")
			.rule(Rule::Required)
			.rule(Rule::NameFormat)
			.rule(Rule::LengthRange {
				min: NAME_MIN,
				max: NAME_MAX,
			}),
	);
	form.add_field(
		FieldSpec::new("correo")
			.with_label("Correo Electrónico")
			.rule(Rule::Required)
			.rule(Rule::Email),
	);
	form.add_field(
		FieldSpec::new("mensaje")
			.with_label("Mensaje")
			.rule(Rule::Required)
			.rule(Rule::LengthRange {
				min: MESSAGE_MIN,
				max: MESSAGE_MAX,
			}),
	);
	form
}

/// The footer newsletter subscription: a single email input.
pub fn newsletter_form() -> FormState {
	let messages = MessageCatalog {
		email_invalid: "Por favor, introduce un email válido.".to_string(),
		success: "¡Gracias por suscribirte! Te mantendremos informado.".to_string(),
		error: "Hubo un error al procesar tu suscripción. Inténtalo de nuevo.".to_string(),
		..MessageCatalog::default()
	};
	let mut form = FormState::with_messages(messages);
	form.add_field(
		FieldSpec::new("email")
			.rule(Rule::Required)
			.rule(Rule::Email),
	);
	form
}

/// The admin login form: username / password.
pub fn login_form() -> FormState {
	let mut form = FormState::new();
	form.add_field(
		FieldSpec::new("username")
			.with_label("Usuario")
			.rule(Rule::Required)
			.rule(Rule::LengthRange {
				min: USERNAME_MIN,
				max: USERNAME_MAX,
			}),
	);
	form.add_field(
		FieldSpec::new("password")
			.with_label("Contraseña")
			.rule(Rule::Required)
			.rule(Rule::LengthRange {
				min: LOGIN_PASSWORD_MIN,
				max: PASSWORD_MAX,
			}),
	);
	form
}

/// The public registration form: username / email / password1 / password2.
///
/// `password1` must reach the medium strength tier (length ≥ 8 with upper,
/// lower, and digit); `password2` must match it.
pub fn register_form() -> FormState {
	let mut form = FormState::new();
	form.add_field(
		FieldSpec::new("username")
			.with_label("Usuario")
			.rule(Rule::Required)
			.rule(Rule::LengthRange {
				min: USERNAME_MIN,
				max: USERNAME_MAX,
			})
			.rule(Rule::Username),
	);
	form.add_field(
		FieldSpec::new("email")
			.with_label("Email")
			.rule(Rule::Required)
			.rule(Rule::Email),
	);
	form.add_field(
		FieldSpec::new("password1")
			.with_label("Contraseña")
			.rule(Rule::Required)
			.rule(Rule::LengthRange {
				min: REGISTER_PASSWORD_MIN,
				max: PASSWORD_MAX,
			})
			.rule(Rule::PasswordStrength {
				minimum: StrengthTier::Medium,
			}),
	);
	form.add_field(
		FieldSpec::new("password2")
			.with_label("Confirmar Contraseña")
			.rule(Rule::Required)
			.rule(Rule::MatchField {
				other: "password1".to_string(),
			}),
	);
	form
}
