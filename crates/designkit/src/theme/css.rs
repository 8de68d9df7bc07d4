//! CSS custom property emission.

use super::CustomTheme;

/// Serializes a theme's four color roles into a `:root` block.
///
/// Emits 44 declarations named `--color-{role}-{shade}`: roles in the order
/// primary, secondary, tertiary, surface, and shades ascending from 50 to
/// 950 within each role. Overridden roles use the derived scale.
///
/// ```rust
/// use designkit::{generate_css_variables, Catalog, CustomTheme};
///
/// let catalog = Catalog::builtin();
/// let theme = CustomTheme::new(
///     catalog.palettes()[0].clone(),
///     catalog.pairings()[0].clone(),
/// );
/// let css = generate_css_variables(&theme);
///
/// assert!(css.starts_with(":root {\n  --color-primary-50: "));
/// assert!(css.ends_with(";\n}"));
/// assert_eq!(css.lines().count(), 46);
/// ```
pub fn generate_css_variables(theme: &CustomTheme) -> String {
    format!(":root {{\n  {}\n}}", theme.css_declarations().join("\n  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::palette::Role;

    fn theme() -> CustomTheme {
        let catalog = Catalog::builtin();
        CustomTheme::new(
            catalog.palette("emerald-amber").unwrap().clone(),
            catalog.pairing("code").unwrap().clone(),
        )
    }

    fn declarations(css: &str) -> Vec<&str> {
        css.lines()
            .filter(|l| l.starts_with("  --"))
            .map(str::trim)
            .collect()
    }

    #[test]
    fn test_block_framing() {
        let css = generate_css_variables(&theme());
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.first(), Some(&":root {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert!(!css.ends_with('\n'));
    }

    #[test]
    fn test_role_and_shade_order() {
        let css = generate_css_variables(&theme());
        let names: Vec<String> = declarations(&css)
            .iter()
            .map(|d| d.split(':').next().unwrap().to_string())
            .collect();

        let mut expected = Vec::new();
        for role in ["primary", "secondary", "tertiary", "surface"] {
            for shade in [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950] {
                expected.push(format!("--color-{}-{}", role, shade));
            }
        }
        assert_eq!(names, expected);
    }

    #[test]
    fn test_palette_values_verbatim() {
        let theme = theme();
        let css = generate_css_variables(&theme);
        let expected = format!(
            "--color-secondary-300: {};",
            theme.palette.secondary.get_key(300).unwrap()
        );
        assert!(declarations(&css).contains(&expected.as_str()));
    }

    #[test]
    fn test_primary_override_leaves_other_roles() {
        let plain = generate_css_variables(&theme());
        let custom = theme()
            .with_custom_color(Role::Primary, "#ff0000")
            .unwrap();
        let overridden = generate_css_variables(&custom);

        let plain = declarations(&plain);
        let overridden = declarations(&overridden);
        assert!(overridden.contains(&"--color-primary-500: #ff0000;"));
        assert_eq!(plain[11..], overridden[11..]);
        assert_ne!(plain[..11], overridden[..11]);
    }
}
