//! `appkit tab` and `appkit persona` commands.

use crate::app::{AppState, Persona, Tab};

/// Show the open tab, or switch to `tab`. Returns whether state changed.
pub fn tab(state: &mut AppState, tab: Option<Tab>) -> bool {
    match tab {
        Some(tab) => {
            state.set_tab(tab);
            println!("Tab: {tab}");
            true
        }
        None => {
            let current = state.tab();
            for tab in Tab::ALL {
                let marker = if tab == current { "*" } else { " " };
                println!("{marker} {tab}");
            }
            false
        }
    }
}

/// Show the selected persona, or switch to `persona`. Returns whether state changed.
pub fn persona(state: &mut AppState, persona: Option<Persona>) -> bool {
    match persona {
        Some(persona) => {
            state.set_persona(persona);
            println!("Persona: {persona}");
            true
        }
        None => {
            let current = state.persona();
            for persona in Persona::ALL {
                let marker = if persona == current { "*" } else { " " };
                println!("{marker} {persona}");
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_reports_a_change() {
        let mut state = AppState::default();
        assert!(tab(&mut state, Some(Tab::Work)));
        assert_eq!(state.tab(), Tab::Work);
        assert!(!tab(&mut state, None));
        assert!(persona(&mut state, Some(Persona::Nonprofit)));
        assert_eq!(state.persona(), Persona::Nonprofit);
    }
}
