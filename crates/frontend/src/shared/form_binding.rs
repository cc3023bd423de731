//! Two-way bindings between one field of a form struct and an input widget.
//!
//! Forms live in a single `RwSignal<Form>` so that a reset is one `set`;
//! these helpers hand out the `(value, on_input)` pair the widgets expect.

use leptos::prelude::*;

pub fn bind_text<F>(
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F, String),
) -> (Signal<String>, Callback<String>)
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).clone()));
    let on_input = Callback::new(move |v: String| form.update(|f| set(f, v)));
    (value, on_input)
}

pub fn bind_flag<F>(
    form: RwSignal<F>,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> (Signal<bool>, Callback<bool>)
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(get));
    let on_change = Callback::new(move |v: bool| form.update(|f| set(f, v)));
    (value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        name: String,
        flag: bool,
    }

    #[test]
    fn test_text_binding_writes_through() {
        let form = RwSignal::new(Probe::default());
        let (value, on_input) = bind_text(form, |f| &f.name, |f, v| f.name = v);

        on_input.run("Kim".to_string());

        assert_eq!(form.with_untracked(|f| f.name.clone()), "Kim");
        assert_eq!(value.get_untracked(), "Kim");
    }

    #[test]
    fn test_flag_binding_writes_through() {
        let form = RwSignal::new(Probe::default());
        let (_, on_change) = bind_flag(form, |f| f.flag, |f, v| f.flag = v);

        on_change.run(true);

        assert!(form.with_untracked(|f| f.flag));
    }
}
