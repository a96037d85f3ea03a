//! Per-form message catalog

/// User-facing message table for one form instance.
///
/// Defaults are the site's Spanish strings. Every entry can be overridden
/// per form instance, which is how the newsletter and auth forms carry
/// their own wording. `too_short` and `too_long` are templates; the
/// `{min}` / `{max}` placeholder is substituted at validation time.
///
/// # Examples
///
/// ```
/// use autoventas_forms::MessageCatalog;
///
/// let messages = MessageCatalog {
///     success: "¡Gracias por suscribirte!".to_string(),
///     ..MessageCatalog::default()
/// };
/// assert_eq!(messages.required, "Este campo es obligatorio");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	pub required: String,
	pub email_invalid: String,
	pub name_invalid: String,
	pub username_invalid: String,
	/// Template; `{min}` is replaced with the bound
	pub too_short: String,
	/// Template; `{max}` is replaced with the bound
	pub too_long: String,
	pub password_weak: String,
	pub mismatch: String,
	/// Form-level banner shown when validation aborts a submit
	pub fix_errors: String,
	pub success: String,
	pub error: String,
	pub server_error: String,
	pub already_subscribed: String,
}

impl Default for MessageCatalog {
	fn default() -> Self {
		Self {
			required: "Este campo es obligatorio".to_string(),
			email_invalid: "Ingresa un email válido".to_string(),
			name_invalid: "El nombre solo puede contener letras y espacios".to_string(),
			username_invalid: "El usuario solo puede contener letras, números y guiones bajos"
				.to_string(),
			too_short: "Debe tener al menos {min} caracteres".to_string(),
			too_long: "No puede exceder {max} caracteres".to_string(),
			password_weak:
				"La contraseña debe contener al menos una mayúscula, una minúscula y un número"
					.to_string(),
			mismatch: "Las contraseñas no coinciden".to_string(),
			fix_errors: "Por favor, corrige los errores antes de continuar.".to_string(),
			success: "Mensaje enviado correctamente".to_string(),
			error: "Error al enviar el mensaje. Inténtalo de nuevo.".to_string(),
			server_error: "Error en el servidor. Inténtalo más tarde.".to_string(),
			already_subscribed: "Este email ya está suscrito a nuestro newsletter.".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_spanish() {
		let messages = MessageCatalog::default();
		assert_eq!(messages.required, "Este campo es obligatorio");
		assert!(messages.too_short.contains("{min}"));
		assert!(messages.too_long.contains("{max}"));
	}

	#[test]
	fn test_struct_update_override() {
		let messages = MessageCatalog {
			success: "¡Suscrito!".to_string(),
			..MessageCatalog::default()
		};
		assert_eq!(messages.success, "¡Suscrito!");
		assert_eq!(messages.error, MessageCatalog::default().error);
	}
}
