//! Plugin installation, the enabled flag and gesture dispatch.

use super::CanvasView;
use crate::geometry::Point;
use crate::input::InternalState;
use crate::plugin::{InstalledPlugin, Plugin, PluginContext, PluginId, PluginPriority, PluginState};
use crate::setting::{ObservationToken, ObserveOptions};
use crate::undo::{CanvasUndo, UndoTarget};
use tracing::debug;

impl CanvasView {
    /// Installs `plugin` above the ones already installed.
    pub fn install_plugin(&mut self, plugin: impl Plugin + 'static) -> PluginId {
        self.install_plugin_boxed(Box::new(plugin))
    }

    pub fn install_plugin_boxed(&mut self, mut plugin: Box<dyn Plugin>) -> PluginId {
        let id = PluginId::next();
        plugin.installed(id, &self.ledger);
        debug!(plugin = %id, priority = ?plugin.priority(), "plugin installed");
        self.plugins.push(InstalledPlugin::new(id, plugin));
        self.request_redraw();
        id
    }

    /// Removes a plugin and every undo entry it owns. Returns the plugin.
    pub fn uninstall_plugin(&mut self, id: PluginId) -> Option<Box<dyn Plugin>> {
        let index = self.plugins.iter().position(|p| p.id == id)?;
        if matches!(self.state, InternalState::Plugin { plugin, .. } if plugin == id) {
            self.state = InternalState::Idle;
        }

        let mut installed = self.plugins.remove(index);
        installed.enabled.remove_all_observers();
        {
            let mut ledger = self.ledger.borrow_mut();
            ledger.remove_all(UndoTarget::Plugin(id));
            ledger.remove_where(|action| {
                matches!(action, CanvasUndo::PluginEnabled { plugin, .. } if *plugin == id)
            });
        }
        installed.plugin.uninstalled();
        debug!(plugin = %id, "plugin uninstalled");
        self.request_redraw();
        Some(installed.plugin)
    }

    pub fn plugin(&self, id: PluginId) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.plugin.as_ref())
    }

    pub fn plugin_ids(&self) -> Vec<PluginId> {
        self.plugins.iter().map(|p| p.id).collect()
    }

    pub fn is_plugin_enabled(&self, id: PluginId) -> Option<bool> {
        self.plugins
            .iter()
            .find(|p| p.id == id)
            .map(InstalledPlugin::is_enabled)
    }

    /// Enables or disables a plugin, registering the previous value for
    /// undo. Returns false for an unknown plugin.
    pub fn set_plugin_enabled(&mut self, id: PluginId, enabled: bool) -> bool {
        let Some(installed) = self.plugins.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        let change = installed.enabled.set(enabled);
        if change.redraw {
            installed.redraw_requested = true;
        }
        if let Some(name) = change.undo {
            self.ledger.borrow_mut().register(
                UndoTarget::Plugin(id),
                name.or_else(|| Some("Enabled".to_string())),
                CanvasUndo::PluginEnabled {
                    plugin: id,
                    enabled: change.old,
                },
            );
        }

        // A disabled plugin gives up its gesture.
        if !enabled {
            if let InternalState::Plugin { plugin, .. } = self.state {
                if plugin == id {
                    self.state = InternalState::Idle;
                }
            }
        }
        true
    }

    /// Subscribes to a plugin's enabled flag.
    pub fn observe_plugin_enabled(
        &mut self,
        id: PluginId,
        options: ObserveOptions,
        mut handler: impl FnMut(bool) + 'static,
    ) -> Option<ObservationToken> {
        let installed = self.plugins.iter_mut().find(|p| p.id == id)?;
        Some(installed.enabled.observe(options, move |value| handler(*value)))
    }

    // ========================================================================
    // Gesture dispatch
    // ========================================================================

    /// First enabled plugin of `priority`, in install order, that claims a
    /// gesture at `location` (view coordinates).
    pub(crate) fn find_plugin(
        &mut self,
        priority: PluginPriority,
        location: Point,
    ) -> Option<PluginId> {
        let context = PluginContext::new(self.transform, &self.objects, &self.selection);
        self.plugins
            .iter_mut()
            .filter(|p| p.is_enabled() && p.priority() == priority)
            .find_map(|p| p.plugin.should_begin(&context, location).then_some(p.id))
    }

    fn dispatch_plugin(&mut self, id: PluginId, state: PluginState) {
        let context = PluginContext::new(self.transform, &self.objects, &self.selection);
        if let Some(installed) = self.plugins.iter_mut().find(|p| p.id == id) {
            installed.plugin.update(&context, state);
            installed.redraw_requested = true;
        }
    }

    pub(crate) fn plugin_began(&mut self, id: PluginId, location: Point) {
        let state = PluginState::Began { location };
        self.dispatch_plugin(id, state);
        self.state = InternalState::Plugin {
            plugin: id,
            state,
            initial: location,
            last: location,
        };
        debug!(plugin = %id, "plugin gesture began");
    }

    pub(crate) fn plugin_moved(
        &mut self,
        id: PluginId,
        location: Point,
        initial: Point,
        last: Point,
    ) {
        let state = PluginState::Changed {
            location,
            last,
            initial,
        };
        self.dispatch_plugin(id, state);
        self.state = InternalState::Plugin {
            plugin: id,
            state,
            initial,
            last: location,
        };
    }

    pub(crate) fn plugin_ended(
        &mut self,
        id: PluginId,
        location: Point,
        initial: Point,
        last: Point,
    ) {
        self.state = InternalState::Idle;
        self.dispatch_plugin(
            id,
            PluginState::Ended {
                location,
                last,
                initial,
            },
        );
        self.dispatch_plugin(id, PluginState::Idle);
        debug!(plugin = %id, "plugin gesture ended");
    }
}
