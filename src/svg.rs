//! Constructors for [***SVG elements***](https://developer.mozilla.org/en-US/docs/Web/SVG/Element).
//!
//! Each function creates an [`Element`] in the [`NAMESPACE`] and applies the given markup to it:
//!
//! ```
//! use vdom_reconcile::{markup::attribute, svg, web::Dom, Element};
//!
//! let icon: Element<Dom> = svg::svg((
//! 	attribute("viewBox", "0 0 10 10"),
//! 	svg::circle((attribute("cx", "5"), attribute("cy", "5"), attribute("r", "4"))),
//! ));
//! assert_eq!(icon.namespace.as_deref(), Some(svg::NAMESPACE));
//! ```

use crate::{element::Element, host::HostTree, markup::Markup};

pub const NAMESPACE: &str = "http://www.w3.org/2000/svg";

macro_rules! svg_elements {
	($($name:ident => $tag:literal;)*) => {
		$(
			#[doc = concat!("Creates an SVG [***", $tag, "***](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/", $tag, ") element.")]
			pub fn $name<H: HostTree>(markup: impl Markup<H>) -> Element<H> {
				Element::new_ns(NAMESPACE, $tag).with(markup)
			}
		)*
	};
}

svg_elements! {
	anchor => "a";
	alternate_glyph => "altGlyph";
	alternate_glyph_definition => "altGlyphDef";
	alternate_glyph_item => "altGlyphItem";
	animate => "animate";
	animate_color => "animateColor";
	animate_motion => "animateMotion";
	animate_transform => "animateTransform";
	circle => "circle";
	clip_path => "clipPath";
	color_profile => "color-profile";
	cursor => "cursor";
	definitions => "defs";
	description => "desc";
	ellipse => "ellipse";
	filter_effect_blend => "feBlend";
	filter_effect_color_matrix => "feColorMatrix";
	filter_effect_component_transfer => "feComponentTransfer";
	filter_effect_composite => "feComposite";
	fe_convolve_matrix => "feConvolveMatrix";
	fe_diffuse_lighting => "feDiffuseLighting";
	filter_effect_displacement_map => "feDisplacementMap";
	filter_effect_distant_light => "feDistantLight";
	filter_effect_flood => "feFlood";
	filter_effect_function_a => "feFuncA";
	filter_effect_function_b => "feFuncB";
	fe_func_g => "feFuncG";
	fe_func_r => "feFuncR";
	filter_effect_gaussian_blur => "feGaussianBlur";
	filter_effect_image => "feImage";
	filter_effect_merge => "feMerge";
	filter_effect_merge_node => "feMergeNode";
	filter_effect_morphology => "feMorphology";
	filter_effect_offset => "feOffset";
	filter_effect_point_light => "fePointLight";
	filter_effect_specular_lighting => "feSpecularLighting";
	fe_spot_light => "feSpotLight";
	filter_effect_tile => "feTile";
	filter_effect_turbulence => "feTurbulence";
	filter => "filter";
	font => "font";
	font_face => "font-face";
	font_face_format => "font-face-format";
	font_face_name => "font-face-name";
	font_face_source => "font-face-src";
	font_face_uri => "font-face-uri";
	foreign_object => "foreignObject";
	group => "g";
	glyph => "glyph";
	glyph_reference => "glyphRef";
	horizontal_kern => "hkern";
	image => "image";
	line => "line";
	linear_gradient => "linearGradient";
	marker => "marker";
	mask => "mask";
	metadata => "metadata";
	missing_glyph => "missing-glyph";
	motion_path => "mpath";
	path => "path";
	pattern => "pattern";
	polygon => "polygon";
	polyline => "polyline";
	radial_gradient => "radialGradient";
	rectangle => "rect";
	script => "script";
	set => "set";
	stop => "stop";
	style => "style";
	svg => "svg";
	switch => "switch";
	symbol => "symbol";
	text => "text";
	text_path => "textPath";
	title => "title";
	text_reference => "tref";
	text_span => "tspan";
	r#use => "use";
	view => "view";
	vertical_kern => "vkern";
}
