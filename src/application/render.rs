//! View updates shared by hydration and submission. The error notice and the
//! result panel are never visible together.

use crate::application::view::{FormView, ResultPanel};

pub fn render_error<V: FormView + ?Sized>(view: &V, message: &str) {
    view.hide_result();
    view.show_error(message);
}

pub fn render_result<V: FormView + ?Sized>(view: &V, panel: &ResultPanel) {
    view.hide_error();
    view.show_result(panel);
}

pub fn enter_loading<V: FormView + ?Sized>(view: &V) {
    view.set_loading(true);
    view.hide_error();
}

pub fn leave_loading<V: FormView + ?Sized>(view: &V) {
    view.set_loading(false);
}
