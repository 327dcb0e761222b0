use std::collections::HashSet;
use std::fmt;

use slotmap::SecondaryMap;
use trellis_core::logging::targets;
use trellis_core::{
    ControlId, Error, EventRegistry, NotReadyReason, PerfSpan, Rect, Result,
};

use super::window_config::WindowConfig;
use crate::control::{Control, ControlBase, Placement};
use crate::group::Group;
use crate::host::{Animation, GridHost, HeadlessHost, HostId, HostPrimitive};
use crate::navigation::{Direction, NavItem, NavigationOptions, compute_navigation};
use crate::placement::{Cell, Grid};

/// Produces the animations assigned to every placed control.
pub type AnimationHook = Box<dyn Fn(&dyn Control) -> Vec<Animation>>;

/// A control held by a window, and the host it currently belongs to.
pub(super) struct ControlSlot {
    pub(super) control: Box<dyn Control>,
    pub(super) owner: Option<HostId>,
}

/// The top-level grid host.
///
/// Controls are moved into the window with [`insert`](Self::insert) and
/// addressed by [`ControlId`] from then on. A control is shown once it is
/// placed into the window grid, into a placed [`Group`], or added at
/// absolute coordinates with [`add_control`](Self::add_control).
///
/// The window is single-threaded: it owns callbacks that are neither `Send`
/// nor `Sync`.
pub struct Window<P: HostPrimitive = HeadlessHost> {
    pub(super) primitive: P,
    pub(super) title: String,
    pub(super) layout: Option<(Rect, Grid)>,
    pub(super) controls: SecondaryMap<ControlId, ControlSlot>,
    /// Direct children of the window grid.
    pub(super) children: Vec<ControlId>,
    /// Everything shown natively, including group children, in order.
    pub(super) added: Vec<ControlId>,
    pub(super) events: EventRegistry,
    pub(super) animation_hook: Option<AnimationHook>,
    pub(super) close_control: Option<ControlId>,
    pub(super) focused: Option<ControlId>,
    pub(super) closed: bool,
}

static_assertions::assert_not_impl_any!(Window: Send, Sync);

impl Window<HeadlessHost> {
    /// Create a window without a native backend.
    pub fn new() -> Self {
        Self::with_primitive(HeadlessHost::new())
    }
}

impl Default for Window<HeadlessHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HostPrimitive> Window<P> {
    /// Create a window driving `primitive`.
    pub fn with_primitive(primitive: P) -> Self {
        Self {
            primitive,
            title: String::new(),
            layout: None,
            controls: SecondaryMap::new(),
            children: Vec::new(),
            added: Vec::new(),
            events: EventRegistry::new(),
            animation_hook: None,
            close_control: None,
            focused: None,
            closed: false,
        }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Set the window geometry and grid.
    ///
    /// Controls placed before a reconfiguration keep their geometry.
    #[tracing::instrument(skip_all, target = "trellis::window", level = "trace")]
    pub fn set_geometry(&mut self, config: &WindowConfig) -> Result<()> {
        let (outer, grid) = config.resolve()?;
        tracing::debug!(
            target: targets::WINDOW,
            window = %outer,
            grid = %grid.area(),
            tile = %grid.tile(),
            "window geometry set"
        );
        self.title = config.title().to_owned();
        self.layout = Some((outer, grid));
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn outer(&self) -> Result<Rect> {
        self.layout
            .as_ref()
            .map(|(outer, _)| *outer)
            .ok_or(Error::NotReady(NotReadyReason::GeometryNotSet))
    }

    /// Left edge in screen pixels.
    pub fn x(&self) -> Result<i32> {
        Ok(self.outer()?.x())
    }

    /// Top edge in screen pixels.
    pub fn y(&self) -> Result<i32> {
        Ok(self.outer()?.y())
    }

    pub fn window_width(&self) -> Result<i32> {
        Ok(self.outer()?.width())
    }

    pub fn window_height(&self) -> Result<i32> {
        Ok(self.outer()?.height())
    }

    // =========================================================================
    // Control store
    // =========================================================================

    /// Move a control into the window. It stays hidden until placed or added.
    pub fn insert(&mut self, control: impl Control) -> ControlId {
        self.insert_boxed(Box::new(control))
    }

    pub fn insert_boxed(&mut self, control: Box<dyn Control>) -> ControlId {
        let id = control.id();
        self.controls.insert(
            id,
            ControlSlot {
                control,
                owner: None,
            },
        );
        id
    }

    /// Take a control out of the window, removing it first if placed.
    pub fn take(&mut self, id: ControlId) -> Result<Box<dyn Control>> {
        if self.slot(id)?.owner.is_some() {
            self.remove_control(id)?;
        }
        self.controls
            .remove(id)
            .map(|slot| slot.control)
            .ok_or(Error::InvalidControl(id))
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(id)
    }

    pub fn control(&self, id: ControlId) -> Option<&dyn Control> {
        self.controls.get(id).map(|slot| slot.control.as_ref())
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut dyn Control> {
        match self.controls.get_mut(id) {
            Some(slot) => Some(slot.control.as_mut()),
            None => None,
        }
    }

    /// Borrow a control's shared state.
    pub fn base(&self, id: ControlId) -> Result<&ControlBase> {
        Ok(self.slot(id)?.control.base())
    }

    pub fn group(&self, id: ControlId) -> Result<&Group> {
        self.slot(id)?
            .control
            .as_group()
            .ok_or(Error::NotAGroup(id))
    }

    /// The host a control currently belongs to.
    pub fn owner(&self, id: ControlId) -> Option<HostId> {
        self.controls.get(id).and_then(|slot| slot.owner)
    }

    pub fn is_placed(&self, id: ControlId) -> bool {
        self.owner(id).is_some()
    }

    /// Every natively shown control, group children included, in the order
    /// they were shown.
    pub fn added_controls(&self) -> &[ControlId] {
        &self.added
    }

    /// Borrow a host by id.
    pub fn host(&self, host: HostId) -> Result<&dyn GridHost> {
        match host {
            HostId::Window => Ok(self),
            HostId::Group(id) => Ok(self.group(id)?),
        }
    }

    pub(super) fn slot(&self, id: ControlId) -> Result<&ControlSlot> {
        self.controls.get(id).ok_or(Error::InvalidControl(id))
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Set the hook producing animations for every placed control.
    pub fn set_animation_hook(&mut self, hook: impl Fn(&dyn Control) -> Vec<Animation> + 'static) {
        self.animation_hook = Some(Box::new(hook));
    }

    /// Place a control into the window grid. See [`place_control_in`](Self::place_control_in).
    pub fn place_control(&mut self, id: ControlId, cell: Cell) -> Result<Rect> {
        self.place_control_in(HostId::Window, id, cell)
    }

    /// Place a control into `host` at `cell`, returning the applied geometry.
    ///
    /// In order: the geometry is applied, the control is shown and attached
    /// to the host, the animation hook runs, and finally the control's
    /// `on_placed` hook. A placed group gets its grid before its hook runs.
    ///
    /// Fails without side effects if the host is not ready, the control is
    /// unknown, or it is already placed.
    #[tracing::instrument(skip(self), target = "trellis::placement", level = "trace")]
    pub fn place_control_in(&mut self, host: HostId, id: ControlId, cell: Cell) -> Result<Rect> {
        let slot = self.slot(id)?;
        if slot.owner.is_some() {
            return Err(Error::AlreadyPlaced(id));
        }
        let geometry = self.host(host)?.cell_geometry(&cell)?;
        let group_grid = match slot.control.as_group() {
            Some(group) => Some(Grid::new(geometry, group.rows()?, group.columns()?)?),
            None => None,
        };

        let slot = self.controls.get_mut(id).ok_or(Error::InvalidControl(id))?;
        slot.control.base_mut().set_geometry(geometry);
        if let (Some(group), Some(grid)) = (slot.control.as_group_mut(), group_grid) {
            group.mark_placed(grid);
        }
        slot.owner = Some(host);
        self.primitive.add_control(slot.control.base());
        self.attach_to(host, id);
        self.added.push(id);
        self.apply_animations(id);

        tracing::debug!(target: targets::PLACEMENT, control = %id, %host, %geometry, "control placed");

        if let Some(hooks) = self
            .controls
            .get_mut(id)
            .and_then(|slot| slot.control.hooks())
        {
            hooks.on_placed(&Placement {
                host,
                cell,
                geometry,
            });
        }
        Ok(geometry)
    }

    /// Show a control at its current geometry without grid placement.
    ///
    /// The control becomes a child of the window. No hooks run.
    pub fn add_control(&mut self, id: ControlId) -> Result<()> {
        self.add_controls(&[id])
    }

    /// Show several controls at their current geometry.
    ///
    /// All ids are validated before any is added.
    pub fn add_controls(&mut self, ids: &[ControlId]) -> Result<()> {
        for (index, id) in ids.iter().enumerate() {
            if self.slot(*id)?.owner.is_some() || ids[..index].contains(id) {
                return Err(Error::AlreadyPlaced(*id));
            }
        }
        for id in ids {
            if let Some(slot) = self.controls.get_mut(*id) {
                slot.owner = Some(HostId::Window);
                self.primitive.add_control(slot.control.base());
                self.children.push(*id);
                self.added.push(*id);
            }
        }
        Ok(())
    }

    fn attach_to(&mut self, host: HostId, id: ControlId) {
        match host {
            HostId::Window => self.children.push(id),
            HostId::Group(group) => {
                if let Some(group) = self
                    .controls
                    .get_mut(group)
                    .and_then(|slot| slot.control.as_group_mut())
                {
                    group.attach(id);
                }
            }
        }
    }

    fn detach_from(&mut self, host: HostId, id: ControlId) {
        match host {
            HostId::Window => self.children.retain(|child| *child != id),
            HostId::Group(group) => {
                if let Some(group) = self
                    .controls
                    .get_mut(group)
                    .and_then(|slot| slot.control.as_group_mut())
                {
                    group.detach(id);
                }
            }
        }
    }

    fn apply_animations(&mut self, id: ControlId) {
        let (Some(hook), Some(slot)) = (&self.animation_hook, self.controls.get(id)) else {
            return;
        };
        let animations = hook(slot.control.as_ref());
        self.primitive.set_animations(id, &animations);
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a placed control from its host.
    ///
    /// A group's children are removed first, depth-first, each receiving
    /// `on_removed` with the group as host. Then the control's own
    /// `on_removed` runs and it is detached. The control stays in the
    /// window and may be placed again. Navigation links and event
    /// connections that refer to it are left alone.
    #[tracing::instrument(skip(self), target = "trellis::placement", level = "trace")]
    pub fn remove_control(&mut self, id: ControlId) -> Result<()> {
        if self.slot(id)?.owner.is_none() {
            return Err(Error::NotPlaced(id));
        }
        self.detach_recursive(id);
        Ok(())
    }

    /// Remove several controls.
    ///
    /// All ids are validated first. Controls already removed as part of an
    /// earlier group in the list are skipped.
    pub fn remove_controls(&mut self, ids: &[ControlId]) -> Result<()> {
        for id in ids {
            if self.slot(*id)?.owner.is_none() {
                return Err(Error::NotPlaced(*id));
            }
        }
        for id in ids {
            if self.is_placed(*id) {
                self.detach_recursive(*id);
            }
        }
        Ok(())
    }

    /// Remove every child of a group, leaving the group itself placed.
    pub fn remove_all_children(&mut self, group: ControlId) -> Result<()> {
        let children = self.group(group)?.children().to_vec();
        for child in children {
            self.detach_recursive(child);
        }
        Ok(())
    }

    fn detach_recursive(&mut self, id: ControlId) {
        let children = self
            .controls
            .get(id)
            .and_then(|slot| slot.control.as_group())
            .map(|group| group.children().to_vec())
            .unwrap_or_default();
        for child in children {
            self.detach_recursive(child);
        }

        let Some(slot) = self.controls.get_mut(id) else {
            return;
        };
        let Some(owner) = slot.owner.take() else {
            return;
        };
        if let Some(hooks) = slot.control.hooks() {
            hooks.on_removed(owner);
        }
        if let Some(group) = slot.control.as_group_mut() {
            group.mark_removed();
        }

        self.primitive.remove_control(id);
        self.detach_from(owner, id);
        self.added.retain(|added| *added != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        tracing::debug!(target: targets::PLACEMENT, control = %id, host = %owner, "control removed");
    }

    // =========================================================================
    // Flags
    // =========================================================================

    /// Show or hide a control. On a group, every current descendant follows.
    pub fn set_visible(&mut self, id: ControlId, visible: bool) -> Result<()> {
        self.slot(id)?;
        self.apply_recursive(id, &|base| base.set_visible(visible));
        Ok(())
    }

    /// Enable or disable a control. On a group, every current descendant
    /// follows.
    pub fn set_enabled(&mut self, id: ControlId, enabled: bool) -> Result<()> {
        self.slot(id)?;
        self.apply_recursive(id, &|base| base.set_enabled(enabled));
        Ok(())
    }

    fn apply_recursive(&mut self, id: ControlId, apply: &dyn Fn(&mut ControlBase)) {
        let Some(slot) = self.controls.get_mut(id) else {
            return;
        };
        apply(slot.control.base_mut());
        if slot.owner.is_some() {
            self.primitive.update_control(slot.control.base());
        }
        let children = slot
            .control
            .as_group()
            .map(|group| group.children().to_vec())
            .unwrap_or_default();
        for child in children {
            self.apply_recursive(child, apply);
        }
    }

    /// Move a control to absolute coordinates.
    pub fn set_position(&mut self, id: ControlId, x: i32, y: i32) -> Result<()> {
        self.update_base(id, |base| base.set_position(x, y))
    }

    pub fn set_size(&mut self, id: ControlId, width: i32, height: i32) -> Result<()> {
        self.update_base(id, |base| base.set_size(width, height))
    }

    fn update_base(&mut self, id: ControlId, update: impl FnOnce(&mut ControlBase)) -> Result<()> {
        let slot = self.controls.get_mut(id).ok_or(Error::InvalidControl(id))?;
        update(slot.control.base_mut());
        if slot.owner.is_some() {
            self.primitive.update_control(slot.control.base());
        }
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Link `id` to `target` in `direction`, or clear the link.
    pub fn set_navigation(
        &mut self,
        id: ControlId,
        direction: Direction,
        target: Option<ControlId>,
    ) -> Result<()> {
        self.update_base(id, |base| base.set_link(direction, target))
    }

    /// Compute and apply directional links between controls.
    ///
    /// Considers every added control, or `options.controls` if given
    /// (repeated ids count once), filtered by kind and flags. Directions without a neighbour keep any
    /// link they had. Returns the number of links set.
    #[tracing::instrument(skip_all, target = "trellis::navigation", level = "trace")]
    pub fn auto_navigation(&mut self, options: &NavigationOptions) -> Result<usize> {
        let _perf = PerfSpan::new("auto_navigation");

        let candidates: Vec<ControlId> = match &options.controls {
            Some(ids) => {
                for id in ids {
                    self.slot(*id)?;
                }
                let mut seen = HashSet::with_capacity(ids.len());
                ids.iter().copied().filter(|id| seen.insert(*id)).collect()
            }
            None => self.added.clone(),
        };
        let items: Vec<NavItem> = candidates
            .iter()
            .filter_map(|id| self.controls.get(*id))
            .filter(|slot| options.accepts(slot.control.as_ref()))
            .map(|slot| NavItem::new(slot.control.id(), slot.control.geometry()))
            .collect();

        let mut linked = 0;
        for (id, links) in compute_navigation(&items, options.vertical_wrap, options.horizontal_wrap) {
            if links.is_empty() {
                continue;
            }
            let Some(slot) = self.controls.get_mut(id) else {
                continue;
            };
            for (direction, target) in links.iter() {
                slot.control.base_mut().set_link(direction, Some(target));
                linked += 1;
            }
            self.primitive.update_control(slot.control.base());
        }

        tracing::debug!(
            target: targets::NAVIGATION,
            controls = items.len(),
            links = linked,
            "auto-navigation applied"
        );
        Ok(linked)
    }
}

impl<P: HostPrimitive> GridHost for Window<P> {
    fn host_id(&self) -> HostId {
        HostId::Window
    }

    fn grid(&self) -> Result<&Grid> {
        self.layout
            .as_ref()
            .map(|(_, grid)| grid)
            .ok_or(Error::NotReady(NotReadyReason::GeometryNotSet))
    }

    fn children(&self) -> &[ControlId] {
        &self.children
    }

    fn attach(&mut self, id: ControlId) {
        self.children.push(id);
    }

    fn detach(&mut self, id: ControlId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        self.children.len() != before
    }
}

impl<P: HostPrimitive + fmt::Debug> fmt::Debug for Window<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("primitive", &self.primitive)
            .field("title", &self.title)
            .field("layout", &self.layout)
            .field("controls", &self.controls.len())
            .field("children", &self.children)
            .field("events", &self.events)
            .field("focused", &self.focused)
            .field("closed", &self.closed)
            .finish()
    }
}
