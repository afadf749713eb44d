use accesskit::{Action, Node, Role};
use smallvec::SmallVec;

use super::{CircularSlider, Handle};

impl CircularSlider {
    /// One slider node per visible handle.
    pub fn accessibility_nodes(&self) -> SmallVec<[(Handle, Node); 2]> {
        let handles: &[Handle] = if self.args.dual {
            &[Handle::Low, Handle::High]
        } else {
            &[Handle::Value]
        };
        handles
            .iter()
            .filter(|handle| self.handle_value(**handle).is_some())
            .map(|handle| (*handle, self.accessibility_node(*handle)))
            .collect()
    }

    fn accessibility_node(&self, handle: Handle) -> Node {
        let mut node = Node::new(Role::Slider);

        let label = match handle {
            Handle::Low => self.args.low_label.as_ref(),
            Handle::High => self.args.high_label.as_ref(),
            Handle::Value => None,
        }
        .or(self.args.label.as_ref());
        if let Some(label) = label {
            node.set_label(label.clone());
        }

        if let Some(value) = self.handle_value(handle) {
            node.set_numeric_value(self.range.stepped_value(value));
        }
        node.set_min_numeric_value(self.range.min());
        node.set_max_numeric_value(self.range.max());
        node.set_numeric_value_step(self.range.step());
        node.set_numeric_value_jump(self.range.ten_percent_step());

        if self.args.disabled {
            node.set_disabled();
        } else if self.args.readonly {
            node.set_read_only();
        } else {
            node.add_action(Action::Focus);
            node.add_action(Action::Increment);
            node.add_action(Action::Decrement);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use crate::slider::CircularSliderArgs;

    use super::*;

    #[test]
    fn single_slider_node() {
        let slider = CircularSlider::new(
            CircularSliderArgs::default()
                .step(0.5)
                .value(22.3)
                .label("Target temperature"),
        )
        .unwrap();
        let nodes = slider.accessibility_nodes();
        assert_eq!(nodes.len(), 1);
        let (handle, node) = &nodes[0];
        assert_eq!(*handle, Handle::Value);
        assert_eq!(node.role(), Role::Slider);
        assert_eq!(node.label(), Some("Target temperature"));
        assert_eq!(node.numeric_value(), Some(22.5));
        assert_eq!(node.min_numeric_value(), Some(0.0));
        assert_eq!(node.max_numeric_value(), Some(100.0));
        assert!(node.supports_action(Action::Increment));
        assert!(node.supports_action(Action::Decrement));
    }

    #[test]
    fn dual_nodes_use_handle_labels() {
        let slider = CircularSlider::new(
            CircularSliderArgs::default()
                .dual(true)
                .low(18.0)
                .high(24.0)
                .label("Range")
                .high_label("Cool to"),
        )
        .unwrap();
        let nodes = slider.accessibility_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].1.label(), Some("Range"));
        assert_eq!(nodes[1].1.label(), Some("Cool to"));
    }

    #[test]
    fn non_interactive_nodes_have_no_actions() {
        let disabled =
            CircularSlider::new(CircularSliderArgs::default().value(1.0).disabled(true)).unwrap();
        let (_, node) = &disabled.accessibility_nodes()[0];
        assert!(node.is_disabled());
        assert!(!node.supports_action(Action::Increment));

        let readonly =
            CircularSlider::new(CircularSliderArgs::default().value(1.0).readonly(true)).unwrap();
        let (_, node) = &readonly.accessibility_nodes()[0];
        assert!(node.is_read_only());
        assert!(!node.supports_action(Action::Decrement));
    }

    #[test]
    fn missing_values_have_no_node() {
        let slider = CircularSlider::new(CircularSliderArgs::default()).unwrap();
        assert!(slider.accessibility_nodes().is_empty());
    }
}
