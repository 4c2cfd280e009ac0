#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    use crate::forward::{SolverConfig, Termination};
    use crate::geometry::{AttachmentSet, Geometry};
    use crate::kinematic_traits::{Kinematics, HOME_POSE};
    use crate::kinematics_error::KinematicsError;
    use crate::kinematics_impl::{compute_forward_kinematics, compute_inverse_kinematics, StewartKinematics};
    use crate::parameters::Parameters;
    use crate::tests::test_utils::reference_geometry;

    const EQUAL_LEGS: f64 = 122.759;

    #[test]
    fn test_equal_legs_give_level_platform() {
        let geometry = reference_geometry();
        let solution = compute_forward_kinematics(&[EQUAL_LEGS; 6], &geometry, None).unwrap();

        assert!(solution.converged);
        assert!(solution.iterations < 10, "Took {} iterations", solution.iterations);
        let pose = solution.pose;
        assert_abs_diff_eq!(pose.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.phi, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.theta, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.psi, 0.0, epsilon = 1e-6);
        // Equal legs of this length lift the platform about 20 above the home pose.
        assert_abs_diff_eq!(pose.z, 120.0, epsilon = 1e-2);

        for length in compute_inverse_kinematics(&pose, &geometry).unwrap() {
            assert_abs_diff_eq!(length, EQUAL_LEGS, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_infeasible_lengths_are_not_reported_as_converged() {
        let geometry = reference_geometry();
        for length in [1.0, 5.0, 10.0] {
            match compute_forward_kinematics(&[length; 6], &geometry, None) {
                Ok(solution) => {
                    assert!(!solution.converged, "Legs of {} reported converged at {}", length, solution.pose);
                    assert_eq!(solution.termination, Termination::IterationLimit);
                    assert_eq!(solution.iterations, 1000);
                }
                Err(KinematicsError::SingularJacobian { .. }) => {}
                Err(e) => panic!("Unexpected error {}", e),
            }
        }
    }

    #[test]
    fn test_five_attachment_points_rejected() {
        let five: Vec<Vector3<f64>> = reference_geometry().base.points()[..5].to_vec();
        let result = AttachmentSet::try_from(five);
        assert!(matches!(result, Err(KinematicsError::InvalidInput(_))));
    }

    #[test]
    fn test_warm_started_cycles() {
        // Leg 0 extends by one unit per cycle, every cycle starts from the previous pose.
        let platform = StewartKinematics::new(Parameters::reference()).unwrap();
        let mut previous = HOME_POSE;
        for cycle in 0..10 {
            let mut lengths = [EQUAL_LEGS; 6];
            lengths[0] += cycle as f64;
            let solution = platform.forward_continuing(&lengths, &previous).unwrap();
            assert!(solution.converged, "Cycle {} did not converge", cycle);
            assert!(solution.iterations < 10);

            let reached = platform.inverse(&solution.pose).unwrap();
            for leg in 0..6 {
                assert_abs_diff_eq!(reached[leg], lengths[leg], epsilon = 1e-2);
            }
            previous = solution.pose;
        }
    }

    #[test]
    fn test_geometry_shared_between_threads() {
        let geometry = reference_geometry();
        let config = SolverConfig::default().with_step_tolerance(1e-11).with_force_tolerance(1e-8);
        let expected = compute_forward_kinematics(&[EQUAL_LEGS; 6], &geometry, Some(&config)).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| compute_forward_kinematics(&[EQUAL_LEGS; 6], &geometry, Some(&config))))
                .collect();
            for handle in handles {
                let solution = handle.join().expect("solver thread").unwrap();
                assert_eq!(solution, expected);
            }
        });
    }

    #[test]
    fn test_singular_geometry() {
        // Platform collapsed into a single point: its orientation cannot be observed.
        let geometry = Geometry::new(
            reference_geometry().base,
            AttachmentSet::new([Vector3::zeros(); 6]).unwrap(),
        );
        let result = compute_forward_kinematics(&[EQUAL_LEGS; 6], &geometry, None);
        assert!(matches!(result, Err(KinematicsError::SingularJacobian { iteration: 1, .. })));
    }
}
