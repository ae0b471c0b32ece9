//! Static component templates, compiled into the binary.
//!
//! The table is keyed by `(Component, typescript)`. The provider has typed
//! and untyped variants; the toggle avoids annotations entirely, so a single
//! template is valid in both dialects.

use crate::config::Component;

const THEME_PROVIDER_TSX: &str = r#"'use client';

import * as React from 'react';
import { ThemeProvider as NextThemesProvider } from 'next-themes';
import { type ThemeProviderProps } from 'next-themes/dist/types';

export function ThemeProvider({ children, ...props }: ThemeProviderProps) {
  return <NextThemesProvider {...props}>{children}</NextThemesProvider>;
}
"#;

const THEME_PROVIDER_JSX: &str = r#"'use client';

import * as React from 'react';
import { ThemeProvider as NextThemesProvider } from 'next-themes';

export function ThemeProvider({ children, ...props }) {
  return <NextThemesProvider {...props}>{children}</NextThemesProvider>;
}
"#;

const THEME_TOGGLE: &str = r#"'use client';

import * as React from 'react';
import { Moon, Sun } from 'lucide-react';
import { useTheme } from 'next-themes';

export function ThemeToggle() {
  const { resolvedTheme, setTheme } = useTheme();
  const [mounted, setMounted] = React.useState(false);

  React.useEffect(() => {
    setMounted(true);
  }, []);

  if (!mounted) {
    return null;
  }

  return (
    <button
      type="button"
      aria-label="Toggle theme"
      onClick={() => setTheme(resolvedTheme === 'dark' ? 'light' : 'dark')}
    >
      {resolvedTheme === 'dark' ? (
        <Sun className="h-5 w-5" />
      ) : (
        <Moon className="h-5 w-5" />
      )}
    </button>
  );
}
"#;

/// Look up the template for a component and output dialect.
pub fn template(component: Component, typescript: bool) -> &'static str {
    match (component, typescript) {
        (Component::ThemeProvider, true) => THEME_PROVIDER_TSX,
        (Component::ThemeProvider, false) => THEME_PROVIDER_JSX,
        // The toggle ships one template for both dialects.
        (Component::ThemeToggle, _) => THEME_TOGGLE,
    }
}
