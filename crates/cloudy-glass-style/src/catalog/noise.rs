//! Embedded noise tile for the acrylic presets.

use cloudy_glass_core::EmbeddedImage;

/// A 32x32 grayscale noise PNG, tiled at low opacity over acrylic fills.
pub static NOISE_TILE: EmbeddedImage = EmbeddedImage::new(
    "acrylic-noise",
    "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAAAAABWESUoAAAEK0lEQVR42gEgBN/7AKVNyhglMLsd\
    bRMs3tYjey7ZHj9yH8sZcRdElNZJPJ1cADRgvjEgHmn+2qDu6LmZf1x8KZn9r+WTJTzWVK9N+tcU\
    ACegrrP+6SMvivIhH57kkcWxC+y1Vjv8Hm+TQn7LyP4pAFXlzY5G3I7Ut8J2TSpaTXZ3BvhdhpAC\
    Sta9o0Ab6cjLAMzJNfbNH2EiauFTOK4aNABNM7oNJGrATIGxuvI+O/nuAPX3nytJNK+H9VILablL\
    DZguhbtVtnKocmN6zXRm/LYOAA6P8YRjsOSyuilwNHTwZKxo9wD1sCs9xmb0W96qLMrtAM0rUVdB\
    Dk3uSvKzT0MKBzRH3mNsDoBslXumhNZDH7XqANdCTQnhXQJMWEjyPR+m9zYdf2GNFTLnDiDipmaN\
    5/R+AIRn5UbVPsjioSV72yVsmz5Pu0mBRu9wMMv5U3JS3M6tANdktqMvuwmt6uEJxKmXIDl1NSuH\
    ixRcikLYhM9M/actAI4dXdkliQgthSpxIoc+6AWt1YlCFno4UoYZXGefnGmUAORbirEJgBIHCWHz\
    feQ23f3JnW51r2VHz7EbQgckgtxTABwrw5B8lhfrXlCJ5AGGuqilfRGeb7ZdAKvDKvOOZn8CAC6H\
    LUnMFckLmZt3K0/Hpv1MkUoW20cIdSsPFUS4NcDnABkJffqHAekjLyHygSaHeGl26/zDJ/WTF2Un\
    S6mCm0QGAPYf+Ikyb/qUku3u7jxmnyvyCJTqJ+aJxmtrJi5IhrhDAI85unb++MkMUQH75s+aSNWw\
    wKE9qQCmrcs9ZAaUgb4hAMnHJ7jbjBiPNBqSTH+I36Fhv9sOzGgpGdLmRpL4GUFXAPHUr5CYgoXP\
    epr3yT1VUiZq/nDnqubaR2J8LlmvLqN6ALyEZwrTxNNrwIqtH/+OuEBuL4p/xMzk3Z8LQRDZ8voA\
    ACXI7+V/N3JPTTfqKxQAQHcTm0GA3zkyJJlixoVyAAWaAOuOoXzzeH4O0p0cC2P/1ymDdNm9dPwR\
    rde5ymUDlSJpAP1mn2N27nGHlzf9X3L41RxKyRttDEjUGh5eyeagOShUAKhhXu8Qn8G/qeJWNwEo\
    jymz1z9qwrae3SwZ8mS+5GKlALryD9J+zxTAEe0gH4NjIK25i6sWhqKNmAEhDHc28+7FAIDc/EP+\
    XQSbTXino+u5KGXIUX7QIRH2plLaNSSHK2oxANf/5Fh3RNXreD6Wlo+JvoKFZeB+X314TpBgpyHK\
    gH12ADPtEjQC83blvxSWdz0ZYWMmvlvlhQM2s28TvK5IFmiCABNoBafRvl6fJ2gQ/fcg0DPKTy5T\
    y4rRkZ3VGp+21NUJALpkyM9oA95Q2Douz7rrU0IHGkjLLb1XSrKRUlciN8T7AGWaQBb3oRvGLFJx\
    z2TyXW8VzFDEtz9MfmIVE6U8x+mcBer31vB+v3QAAAAASUVORK5CYII=",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_to_png_bytes() {
        let bytes = NOISE_TILE.decode().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(bytes.len(), 1124);
    }
}
