use super::*;

impl QuizApp {
    /// Deja la navegación pendiente; la UI la aplica después de mostrar el aviso.
    pub fn navigate(&mut self, route: Route) {
        log::info!("navegando a {}", route.path());
        self.pending_navigation = Some(route);
    }

    /// En web es una redirección completa de página; en nativo cambia la vista.
    pub fn flush_navigation(&mut self) {
        let Some(route) = self.pending_navigation.take() else {
            return;
        };

        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            match window.location().set_href(route.path()) {
                Ok(()) => return,
                Err(err) => log::warn!("no se pudo redirigir a {}: {err:?}", route.path()),
            }
        }

        self.enter_route(route);
    }

    pub fn enter_route(&mut self, route: Route) {
        self.route = route;
        self.confirm_back_home = false;
        match route {
            Route::Home => {
                self.session = None;
                self.homework = None;
                self.home_form = HomeForm::from_storage(self.storage.as_ref(), &self.config);
            }
            Route::Test => self.iniciar_test(),
            Route::Report => self.cargar_informe(),
        }
    }

    /// Guarda la configuración del formulario y pasa a la pantalla de test.
    pub fn comenzar_test(&mut self) {
        let Some(params) = self.home_form.to_params() else {
            return;
        };
        if let Err(err) = params.write_to(self.storage.as_mut()) {
            log::error!("{err}");
            self.alert = Some(err.to_string());
            return;
        }
        self.navigate(Route::Test);
    }

    pub fn pedir_volver_a_inicio(&mut self) {
        self.confirm_back_home = true;
    }

    pub fn responder_volver_a_inicio(&mut self, confirmed: bool) {
        self.confirm_back_home = false;
        if confirmed {
            self.navigate(Route::Home);
        }
    }
}
