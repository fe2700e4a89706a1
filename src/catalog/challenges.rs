//! React Native and Flutter challenge definitions
//!
//! These games share one shape: a locked/unlocked ladder of code-fix
//! challenges, each verified by keyword criteria against the submitted
//! text (see `verify::keywords`).

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{Difficulty, GameKind};

/// A single pass criterion: met when every keyword appears in the
/// lowercased submission.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordCriterion {
    /// What the criterion checks, shown in feedback
    pub label: &'static str,
    /// Lowercase substrings that must all be present
    pub keywords: Vec<&'static str>,
}

impl KeywordCriterion {
    pub fn new(label: &'static str, keywords: Vec<&'static str>) -> Self {
        Self { label, keywords }
    }
}

/// One dialog-based code challenge level
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeLevel {
    pub id: u32,
    pub game: GameKind,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    /// Suggested time budget in minutes (display only)
    pub time_limit_min: u32,
    /// Whether the level starts locked; level N+1 unlocks when N completes
    pub starts_locked: bool,
    pub challenge_description: &'static str,
    pub initial_code: &'static str,
    pub expected_output: &'static str,
    pub hints: Vec<&'static str>,
    pub criteria: Vec<KeywordCriterion>,
}

pub static REACT_NATIVE_LEVELS: Lazy<Vec<ChallengeLevel>> = Lazy::new(|| {
    vec![
        ChallengeLevel {
            id: 1,
            game: GameKind::ReactNativeRanger,
            title: "Fix The Shopping Cart",
            description: "Debug a shopping app where items don't add to the cart correctly.",
            difficulty: Difficulty::Beginner,
            xp_reward: 50,
            time_limit_min: 10,
            starts_locked: false,
            challenge_description: "The ShoppingCart component doesn't update when new items are added. Find and fix the bug in the state management.",
            initial_code: r##"import React, { useState } from 'react';
import { View, Text, Button, FlatList } from 'react-native';

const ShoppingCart = () => {
  const [items, setItems] = useState([]);

  const products = [
    { id: 1, name: 'Headphones', price: 99.99 },
    { id: 2, name: 'Smart Watch', price: 199.99 },
    { id: 3, name: 'Bluetooth Speaker', price: 49.99 },
  ];

  const addToCart = (product) => {
    // BUG: This doesn't update the state correctly
    items.push(product);
  };

  return (
    <View style={{ padding: 20 }}>
      <Text style={{ fontSize: 24, marginBottom: 20 }}>Products</Text>
      <FlatList
        data={products}
        keyExtractor={(item) => item.id.toString()}
        renderItem={({ item }) => (
          <View style={{ marginBottom: 10 }}>
            <Text>{item.name} - ${item.price}</Text>
            <Button title="Add to Cart" onPress={() => addToCart(item)} />
          </View>
        )}
      />
      <Text style={{ fontSize: 20, marginTop: 20 }}>Cart Items: {items.length}</Text>
    </View>
  );
};

export default ShoppingCart;"##,
            expected_output: "The shopping cart should update when items are added, displaying the correct count and list of items.",
            hints: vec![
                "Think about how React state should be updated. Direct mutations won't trigger re-renders.",
                "The setItems function should be used to update the state.",
                "Try using the spread operator or Array.concat() to create a new array.",
            ],
            criteria: vec![
                KeywordCriterion::new("uses useState", vec!["usestate"]),
                KeywordCriterion::new("updates via setItems", vec!["setitems"]),
                KeywordCriterion::new("renders with FlatList", vec!["flatlist"]),
            ],
        },
        ChallengeLevel {
            id: 2,
            game: GameKind::ReactNativeRanger,
            title: "Navigation Nightmare",
            description: "Fix a broken navigation system in a social media app.",
            difficulty: Difficulty::Intermediate,
            xp_reward: 75,
            time_limit_min: 15,
            starts_locked: true,
            challenge_description: "The app's navigation system is broken. Users can't move between screens properly. Fix the React Navigation setup.",
            initial_code: r##"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createStackNavigator } from '@react-navigation/stack';
import HomeScreen from './HomeScreen';
import ProfileScreen from './ProfileScreen';
import SettingsScreen from './SettingsScreen';

const Stack = createStackNavigator();

const AppNavigator = () => {
  return (
    <NavigationContainer>
      <Stack.Navigator>
        {/* BUG: Navigation setup is incorrect */}
        <Stack.Screen component={HomeScreen} />
        <Stack.Screen name="Settings" component={ProfileScreen} />
        <Stack.Screen name="Profile" component={SettingsScreen} />
      </Stack.Navigator>
    </NavigationContainer>
  );
};

export default AppNavigator;"##,
            expected_output: "Navigation should work correctly with proper screen names and components.",
            hints: vec![
                "Each Stack.Screen needs a unique 'name' prop.",
                "The HomeScreen is missing its name prop.",
                "The ProfileScreen and SettingsScreen components are switched.",
            ],
            criteria: vec![
                KeywordCriterion::new("names the home screen", vec!["name=\"home\""]),
                KeywordCriterion::new("profile screen wired up", vec!["profilescreen"]),
                KeywordCriterion::new("settings screen wired up", vec!["settingsscreen"]),
                KeywordCriterion::new("keeps the stack navigator", vec!["stack.navigator"]),
            ],
        },
        ChallengeLevel {
            id: 3,
            game: GameKind::ReactNativeRanger,
            title: "API Integration",
            description: "Implement a product listing that fetches data from an API.",
            difficulty: Difficulty::Advanced,
            xp_reward: 100,
            time_limit_min: 20,
            starts_locked: true,
            challenge_description: "Create a ProductList component that fetches products from an API and displays them with proper loading and error states.",
            initial_code: r##"import React, { useState } from 'react';
import { View, Text, FlatList, ActivityIndicator } from 'react-native';

const ProductList = () => {
  const [products, setProducts] = useState([]);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

  // TODO: Implement the fetchProducts function
  const fetchProducts = () => {
    // Fetch data from https://fakestoreapi.com/products
  };

  // TODO: Call fetchProducts when component mounts

  if (loading) {
    return <ActivityIndicator size="large" color="#0000ff" />;
  }

  if (error) {
    return <Text>Error loading products</Text>;
  }

  return (
    <View style={{ padding: 20 }}>
      <FlatList
        data={products}
        keyExtractor={(item) => item.id.toString()}
        renderItem={({ item }) => <Text>{item.title}</Text>}
      />
    </View>
  );
};

export default ProductList;"##,
            expected_output: "The app should fetch products from the API, display a loading indicator while fetching, handle errors, and display the products in a list.",
            hints: vec![
                "Use the useEffect hook to fetch data when the component mounts.",
                "Implement proper try/catch handling for the fetch operation.",
                "Update loading, error, and products states at appropriate times during the fetch operation.",
            ],
            criteria: vec![
                KeywordCriterion::new("uses useState", vec!["usestate"]),
                KeywordCriterion::new("fetches from the API", vec!["fetch"]),
                KeywordCriterion::new("guards with try", vec!["try"]),
                KeywordCriterion::new("handles errors with catch", vec!["catch"]),
            ],
        },
    ]
});

pub static FLUTTER_LEVELS: Lazy<Vec<ChallengeLevel>> = Lazy::new(|| {
    vec![
        ChallengeLevel {
            id: 1,
            game: GameKind::FlutterForge,
            title: "Basic Login UI",
            description: "Create a beautiful login screen with Flutter widgets.",
            difficulty: Difficulty::Beginner,
            xp_reward: 50,
            time_limit_min: 10,
            starts_locked: false,
            challenge_description: "Build a login screen with email and password inputs, a login button, and a 'Forgot Password?' link.",
            initial_code: r##"import 'package:flutter/material.dart';

class LoginScreen extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    // TODO: Implement the login screen UI
    return Scaffold(
      appBar: AppBar(
        title: Text('Login'),
      ),
      body: Center(
        child: Text('Login Screen'),
      ),
    );
  }
}"##,
            expected_output: "A beautiful login screen with text inputs for email and password, a login button, and a forgot password link.",
            hints: vec![
                "Use Column widget to arrange elements vertically.",
                "TextFormField widgets are great for input fields.",
                "Add padding and margin for better spacing.",
                "Use ElevatedButton for the login button.",
            ],
            criteria: vec![
                KeywordCriterion::new("arranges with Column", vec!["column"]),
                KeywordCriterion::new("input fields", vec!["textformfield"]),
                KeywordCriterion::new("login button", vec!["elevatedbutton"]),
            ],
        },
        ChallengeLevel {
            id: 2,
            game: GameKind::FlutterForge,
            title: "Animated Card Grid",
            description: "Build a grid of cards with staggered animations.",
            difficulty: Difficulty::Intermediate,
            xp_reward: 75,
            time_limit_min: 15,
            starts_locked: true,
            challenge_description: "Create a grid of animated cards that appear with a staggered animation when the screen loads.",
            initial_code: r##"import 'package:flutter/material.dart';

class AnimatedCardGrid extends StatefulWidget {
  @override
  _AnimatedCardGridState createState() => _AnimatedCardGridState();
}

class _AnimatedCardGridState extends State<AnimatedCardGrid> {
  // TODO: Add animation controllers and state

  @override
  void initState() {
    super.initState();
    // TODO: Initialize animations
  }

  @override
  void dispose() {
    // TODO: Dispose animation controllers
    super.dispose();
  }

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: Text('Animated Card Grid'),
      ),
      body: Center(
        child: Text('Implement the grid here'),
      ),
    );
  }
}"##,
            expected_output: "A grid of cards that animates in with a staggered effect when the screen loads.",
            hints: vec![
                "Use AnimationController and Animation<double> for the animations.",
                "GridView.builder is perfect for creating the card grid.",
                "Use staggered delays with Future.delayed or calculate delays based on index.",
                "Create a custom card widget that accepts an animation.",
            ],
            criteria: vec![
                KeywordCriterion::new("drives an AnimationController", vec!["animationcontroller"]),
                KeywordCriterion::new("builds a grid", vec!["gridview"]),
                KeywordCriterion::new("disposes controllers", vec!["dispose"]),
            ],
        },
        ChallengeLevel {
            id: 3,
            game: GameKind::FlutterForge,
            title: "Interactive Dashboard",
            description: "Create a dashboard with interactive charts and statistics.",
            difficulty: Difficulty::Advanced,
            xp_reward: 100,
            time_limit_min: 20,
            starts_locked: true,
            challenge_description: "Build a dashboard with multiple interactive card widgets showing statistics and a simple chart.",
            initial_code: r##"import 'package:flutter/material.dart';

class DashboardScreen extends StatefulWidget {
  @override
  _DashboardScreenState createState() => _DashboardScreenState();
}

class _DashboardScreenState extends State<DashboardScreen> {
  // Mock data for the dashboard
  final List<Map<String, dynamic>> statistics = [
    {'title': 'Total Users', 'value': 24680, 'increase': true, 'percentage': 12.5},
    {'title': 'Revenue', 'value': 8570, 'increase': true, 'percentage': 8.2},
    {'title': 'Tasks', 'value': 1243, 'increase': false, 'percentage': 3.6},
    {'title': 'Products', 'value': 427, 'increase': true, 'percentage': 4.3},
  ];

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: Text('Dashboard'),
      ),
      body: Center(
        child: Text('Implement the dashboard here'),
      ),
    );
  }
}

// TODO: Implement StatCard widget

// TODO: Implement SimpleChart widget"##,
            expected_output: "A responsive dashboard with multiple statistics cards and at least one interactive chart.",
            hints: vec![
                "Create reusable widget components for statistics cards and charts.",
                "Use GridView or CustomScrollView for responsive layouts.",
                "Custom paint or a charting library can be used for simple charts.",
                "Use animations to make the dashboard feel interactive.",
            ],
            criteria: vec![
                KeywordCriterion::new("stat card widget", vec!["statcard"]),
                KeywordCriterion::new("responsive grid layout", vec!["gridview"]),
                KeywordCriterion::new("draws a chart", vec!["chart"]),
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_level_unlocked_rest_locked() {
        for levels in [&*REACT_NATIVE_LEVELS, &*FLUTTER_LEVELS] {
            assert!(!levels[0].starts_locked);
            assert!(levels[1..].iter().all(|l| l.starts_locked));
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for level in REACT_NATIVE_LEVELS.iter().chain(FLUTTER_LEVELS.iter()) {
            for criterion in &level.criteria {
                for kw in &criterion.keywords {
                    assert_eq!(*kw, kw.to_lowercase(), "level {}", level.id);
                }
            }
        }
    }
}
