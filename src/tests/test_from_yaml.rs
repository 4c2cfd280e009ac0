#[cfg(test)]
mod tests {
    use crate::forward::SolverConfig;
    use crate::kinematic_traits::Pose;
    use crate::kinematics_error::KinematicsError;
    use crate::parameter_error::ParameterError;
    use crate::parameters::Parameters;

    const READ_ERROR: &'static str = "Failed to load parameters from file";

    #[test]
    fn test_parameters_from_yaml() {
        let filename = "src/tests/data/reference_platform.yaml";
        let loaded = Parameters::from_yaml_file(filename).expect(READ_ERROR);
        assert_eq!(loaded, Parameters::reference());
    }

    #[test]
    fn test_parameters_with_heights() {
        let filename = "src/tests/data/raised_plates.yaml";
        let loaded = Parameters::from_yaml_file(filename).expect(READ_ERROR);

        let mut expected = Parameters::symmetric(80.0, 10.0, 40.0, 20.0);
        expected.base_height = 10.0;
        expected.platform_height = -5.5;
        assert_eq!(loaded, expected);

        let geometry = loaded.geometry().unwrap();
        assert_eq!(geometry.base.point(3).z, 10.0);
        assert_eq!(geometry.platform.point(3).z, -5.5);
    }

    #[test]
    fn test_solver_config_from_yaml() {
        let filename = "src/tests/data/reference_platform.yaml";
        let loaded = SolverConfig::from_yaml_file(filename).expect(READ_ERROR);

        assert_eq!(loaded.initial_guess, Pose::new(0.0, 0.0, 110.0, 0.0, 0.0, 0.0));
        assert_eq!(loaded.force_tolerance, 1e-6);
        // Not present in the file
        assert_eq!(loaded.step_tolerance, SolverConfig::default().step_tolerance);
        assert_eq!(loaded.max_iterations, 200);
        assert_eq!(loaded.divergence_limit, Some(20));
    }

    #[test]
    fn test_solver_section_is_optional() {
        let filename = "src/tests/data/raised_plates.yaml";
        let loaded = SolverConfig::from_yaml_file(filename).expect(READ_ERROR);
        assert_eq!(loaded, SolverConfig::default());
    }

    #[test]
    fn test_initial_guess_angles_in_degrees() {
        let yaml = "forward_solver:\n  initial_guess: [1, 2, 105.5, 90, 0, -45]\n";
        let loaded = SolverConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(loaded.initial_guess, Pose::from_degrees(1.0, 2.0, 105.5, 90.0, 0.0, -45.0));
    }

    #[test]
    fn test_wrong_number_of_angles() {
        let result = Parameters::from_yaml_file("src/tests/data/five_angles.yaml");
        match result {
            Err(ParameterError::InvalidLength { field, expected, found }) => {
                assert_eq!(field, "base_angles");
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("Expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_radius() {
        let result = Parameters::from_yaml_file("src/tests/data/negative_radius.yaml");
        assert!(matches!(
            result,
            Err(ParameterError::KinematicsConfigurationError(KinematicsError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_missing_radius() {
        let result = Parameters::from_yaml_file("src/tests/data/missing_radius.yaml");
        match result {
            Err(ParameterError::ParseError(message)) => assert!(message.contains("base_radius"), "{}", message),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_platform_section() {
        let result = Parameters::from_yaml_str("forward_solver:\n  max_iterations: 10\n");
        assert!(matches!(result, Err(ParameterError::MissingField(ref field)) if field == "stewart_platform"));
    }

    #[test]
    fn test_missing_file() {
        let result = Parameters::from_yaml_file("src/tests/data/no_such_platform.yaml");
        assert!(matches!(result, Err(ParameterError::IoError(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(Parameters::from_yaml_str("stewart_platform: [1, 2"), Err(ParameterError::ParseError(_))));
        assert!(matches!(SolverConfig::from_yaml_str(""), Err(ParameterError::ParseError(_))));
    }

    #[test]
    fn test_non_numeric_angle() {
        let yaml = "stewart_platform:\n  \
            base_angles: [15, 105, north, 225, 255, 345]\n  \
            base_radius: 50\n  \
            platform_angles: [45, 75, 165, 195, 285, 315]\n  \
            platform_radius: 50\n";
        assert!(matches!(Parameters::from_yaml_str(yaml), Err(ParameterError::ParseError(_))));
    }

    #[test]
    fn test_invalid_solver_values() {
        let negative = SolverConfig::from_yaml_str("forward_solver:\n  max_iterations: -3\n");
        assert!(matches!(negative, Err(ParameterError::ParseError(_))));

        let text = SolverConfig::from_yaml_str("forward_solver:\n  step_tolerance: tight\n");
        assert!(matches!(text, Err(ParameterError::ParseError(_))));

        let zero = SolverConfig::from_yaml_str("forward_solver:\n  force_tolerance: 0\n");
        assert!(matches!(zero, Err(ParameterError::KinematicsConfigurationError(_))));

        let no_divergence = SolverConfig::from_yaml_str("forward_solver:\n  divergence_limit: 0\n");
        assert!(matches!(no_divergence, Err(ParameterError::KinematicsConfigurationError(_))));
    }

    #[test]
    fn test_to_yaml_reads_back() {
        let parameters = Parameters::symmetric(80.0, 10.0, 40.0, 20.0);
        let loaded = Parameters::from_yaml_str(&parameters.to_yaml()).unwrap();
        assert_eq!(loaded, parameters);
    }
}
